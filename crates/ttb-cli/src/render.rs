//! Terminal rendering of the editor view and the workload summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ttb_editor::{FacultyCard, FacultyWorkload, SelectField, SubjectCard, VariantFields, View};

use crate::command::USAGE;

pub fn render_view(view: &View) -> String {
    if view.faculties.is_empty() {
        return "No faculty members yet. Use `add-faculty` to start.".to_string();
    }
    view.faculties
        .iter()
        .map(faculty_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn faculty_block(card: &FacultyCard) -> String {
    let mut fields = Table::new();
    apply_table_style(&mut fields);
    fields.add_row(vec![label_cell("Name"), text_cell(&card.name)]);
    fields.add_row(vec![label_cell("Full name"), text_cell(&card.full_name)]);
    fields.add_row(vec![label_cell("Designation"), select_cell(&card.designation)]);
    fields.add_row(vec![label_cell("Shift"), select_cell(&card.shift)]);
    fields.add_row(vec![
        label_cell("Weekly hours"),
        Cell::new(card.weekly_hours),
    ]);

    let mut out = format!("{} [{}]\n{fields}", card.title, card.index);
    if card.subjects.is_empty() {
        out.push_str("\nNo subjects.");
    } else {
        out.push('\n');
        out.push_str(&subject_table(&card.subjects).to_string());
    }
    out
}

fn subject_table(subjects: &[SubjectCard]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Type"),
        header_cell("Sem"),
        header_cell("Div"),
        header_cell("Div shift"),
        header_cell("Subject"),
        header_cell("Code"),
        header_cell("Sessions"),
        header_cell("Holidays"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for card in subjects {
        table.add_row(vec![
            Cell::new(card.index),
            Cell::new(card.kind),
            select_cell(&card.semester),
            text_cell(&card.division),
            select_cell(&card.div_shift),
            text_cell(&card.subject),
            text_cell(&card.course_code),
            Cell::new(sessions_label(&card.variant)),
            holiday_cell(card),
        ]);
    }
    table
}

fn sessions_label(variant: &VariantFields) -> String {
    match variant {
        VariantFields::Theory { theory_classes } => format!("{theory_classes} classes"),
        VariantFields::Lab {
            num_labs,
            batches,
            batches_grouped,
        } => {
            let grouping = if *batches_grouped { "grouped" } else { "each" };
            format!("{num_labs} labs, {batches} ({grouping})")
        }
    }
}

fn holiday_cell(card: &SubjectCard) -> Cell {
    let days: Vec<&str> = card
        .holidays
        .iter()
        .filter(|checkbox| checkbox.checked)
        .map(|checkbox| checkbox.day.as_str())
        .collect();
    let days = if days.is_empty() {
        "-".to_string()
    } else {
        days.join(" ")
    };
    let text = format!("{days} ({})", card.holiday_usage);
    if card.over_capacity {
        Cell::new(format!("{text} over allowance"))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(text)
    }
}

pub fn render_summary(workload: &[FacultyWorkload]) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Faculty"),
        header_cell("Full name"),
        header_cell("Semester"),
        header_cell("Subject"),
        header_cell("Theory"),
        header_cell("Labs"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    for column in 4..=6 {
        align_column(&mut table, column, CellAlignment::Right);
    }

    for faculty in workload {
        for row in &faculty.rows {
            table.add_row(vec![
                text_cell(&faculty.name),
                text_cell(&faculty.full_name),
                Cell::new(&row.semester),
                text_cell(&row.subject),
                Cell::new(row.theory_sessions),
                Cell::new(row.lab_blocks),
                Cell::new(row.total()),
            ]);
        }
        table.add_row(vec![
            text_cell(&faculty.name).add_attribute(Attribute::Bold),
            dim_cell(format!("{} weekly hours", faculty.weekly_hours)),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new(faculty.total())
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table.to_string()
}

pub fn render_help() -> String {
    let width = USAGE.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    USAGE
        .iter()
        .map(|(usage, about)| format!("  {usage:<width$}  {about}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn label_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan)
}

fn text_cell(text: &str) -> Cell {
    if text.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(text)
    }
}

fn select_cell(field: &SelectField) -> Cell {
    if field.known {
        Cell::new(&field.value)
    } else {
        Cell::new(format!("{:?} (expected {})", field.value, field.options.join("|")))
            .fg(Color::Yellow)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttb_editor::{FacultyField, FacultyStore, SubjectField, render, workload};
    use ttb_model::{SubjectKind, Weekday};

    fn store() -> FacultyStore {
        let mut store = FacultyStore::new();
        store.add_faculty();
        store
            .update_faculty_field(0, FacultyField::Name, "MSK")
            .unwrap();
        store
            .update_faculty_field(0, FacultyField::Shift, "9-4")
            .unwrap();
        store.add_subject(0, SubjectKind::Lab).unwrap();
        store
            .update_subject_field(0, 0, SubjectField::Subject, "Networks")
            .unwrap();
        store
            .update_subject_field(0, 0, SubjectField::NumHolidays, "1")
            .unwrap();
        store.toggle_holiday(0, 0, Weekday::Fri, true).unwrap();
        store
    }

    #[test]
    fn empty_view_hints_at_first_command() {
        assert!(render_view(&render(&FacultyStore::new())).contains("add-faculty"));
    }

    #[test]
    fn view_lists_fields_and_subjects() {
        let text = render_view(&render(&store()));
        assert!(text.contains("Faculty #1 [0]"));
        assert!(text.contains("MSK"));
        assert!(text.contains("expected 8-3|10-5"));
        assert!(text.contains("Networks"));
        assert!(text.contains("Fri (1/1)"));
        assert!(text.contains("1 labs, B1 (each)"));
    }

    #[test]
    fn summary_totals_rows() {
        let text = render_summary(&workload(&store()));
        assert!(text.contains("Networks"));
        assert!(text.contains("18 weekly hours"));
    }

    #[test]
    fn help_lists_every_command() {
        let help = render_help();
        for (usage, _) in USAGE {
            assert!(help.contains(usage));
        }
    }
}
