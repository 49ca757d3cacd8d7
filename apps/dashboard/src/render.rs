use roster_core::RosterView;
use shared::domain::CatRecord;

const HEADERS: [&str; 4] = ["Name", "Experience", "Breed", "Salary"];

fn row(cat: &CatRecord) -> [String; 4] {
    [
        cat.name.to_string(),
        format!("{} yrs", cat.experience_years),
        cat.breed.clone(),
        format!("${}", cat.salary),
    ]
}

pub fn render_roster(view: &RosterView) -> String {
    if view.is_loading {
        return "Loading...\n".to_string();
    }

    let mut out = String::new();
    if view.is_stale {
        out.push_str("(roster may be out of date: last refresh failed)\n");
    }
    if view.cats.is_empty() {
        out.push_str("No cats on the roster.\n");
        return out;
    }

    let rows: Vec<[String; 4]> = view.cats.iter().map(row).collect();
    let mut widths = HEADERS.map(str::len);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for cells in &rows {
        push_line(&mut out, cells, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::CatName;

    fn view(cats: Vec<CatRecord>) -> RosterView {
        RosterView {
            cats,
            is_loading: false,
            is_stale: false,
            revision: 1,
            pending_edit: None,
        }
    }

    #[test]
    fn renders_aligned_table() {
        let rendered = render_roster(&view(vec![
            CatRecord {
                name: CatName::from("Tom"),
                experience_years: 3,
                breed: "Tabby".into(),
                salary: 40000,
            },
            CatRecord {
                name: CatName::from("Whiskers"),
                experience_years: 12,
                breed: "Bengal".into(),
                salary: 5,
            },
        ]));

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name      Experience  Breed   Salary");
        assert_eq!(lines[2], "Tom       3 yrs       Tabby   $40000");
        assert_eq!(lines[3], "Whiskers  12 yrs      Bengal  $5");
    }

    #[test]
    fn loading_hides_table() {
        let mut loading = view(Vec::new());
        loading.is_loading = true;
        assert_eq!(render_roster(&loading), "Loading...\n");
    }

    #[test]
    fn stale_roster_is_flagged() {
        let mut stale = view(Vec::new());
        stale.is_stale = true;
        let rendered = render_roster(&stale);
        assert!(rendered.starts_with("(roster may be out of date"));
        assert!(rendered.contains("No cats on the roster."));
    }
}
