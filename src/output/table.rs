//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::{Listing, Site};

/// Blank columns between adjacent cells
const COLUMN_GAP: u16 = 2;

/// Render records as an aligned table with an upper-case header row
///
/// An empty list yields the header row alone.
pub fn render<R: Listing>(records: &[R], site: &Site) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(R::HEADERS.to_vec());

    for record in records {
        table.add_row(record.table_row(site));
    }

    for column in table.column_iter_mut() {
        column.set_padding((0, COLUMN_GAP));
    }

    table
        .lines()
        .map(|line| line.trim_end().to_string())
        // skip border rows the preset leaves blank
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hcp::{Run, TeamAccess, WorkspaceVariable};

    const SITE: Site<'static> = Site {
        address: "example.com",
        organization: "acme",
    };

    fn run(workspace: &str, status: &str, confirmable: bool, id: &str) -> Run {
        Run {
            workspace: workspace.to_string(),
            status: status.to_string(),
            is_confirmable: confirmable,
            id: id.to_string(),
        }
    }

    #[test]
    fn test_table_empty_is_header_only() {
        let out = render::<Run>(&[], &SITE);
        assert_eq!(out.lines().count(), 1);
        let header: Vec<&str> = out.split_whitespace().collect();
        assert_eq!(header, vec!["WORKSPACE", "STATUS", "NEEDS", "CONFIRM", "LINK"]);
    }

    /// Column names of a header-only table, split on the column gap
    fn header_cells(out: &str) -> Vec<&str> {
        out.split("  ")
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .collect()
    }

    #[test]
    fn test_table_empty_team_accesses_is_header_only() {
        let out = render::<TeamAccess>(&[], &SITE);
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("TEAM"));
        assert_eq!(
            header_cells(&out),
            vec!["TEAM", "TEAM ID", "WORKSPACE", "ACCESS ID", "PRIVILEGE"]
        );
    }

    #[test]
    fn test_table_empty_variables_is_header_only() {
        let out = render::<WorkspaceVariable>(&[], &SITE);
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("WORKSPACE"));
        assert_eq!(header_cells(&out), vec!["WORKSPACE", "NAME", "ID", "VALUE"]);
    }

    #[test]
    fn test_table_runs_end_to_end() {
        let runs = [
            run("prod", "applied", false, "run-1"),
            run("stage", "planned", true, "run-2"),
        ];
        let out = render(&runs, &SITE);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("WORKSPACE"));
        assert!(lines[1].starts_with("prod"));
        assert!(lines[1].contains("applied"));
        assert!(lines[1].contains("false"));
        assert!(lines[1].ends_with("https://example.com/app/acme/workspaces/prod/runs/run-1"));
        assert!(lines[2].starts_with("stage"));
        assert!(lines[2].contains("true"));
        assert!(lines[2].ends_with("https://example.com/app/acme/workspaces/stage/runs/run-2"));
    }

    #[test]
    fn test_table_columns_are_aligned() {
        let runs = [
            run("a", "applied", false, "run-1"),
            run("much-longer-name", "planned", true, "run-2"),
        ];
        let out = render(&runs, &SITE);
        let status_cols: Vec<usize> = out
            .lines()
            .map(|line| {
                ["STATUS", "applied", "planned"]
                    .iter()
                    .find_map(|word| line.find(word))
                    .unwrap()
            })
            .collect();
        assert!(status_cols.windows(2).all(|w| w[0] == w[1]));
        assert!(status_cols[0] >= "much-longer-name".len() + 1);
    }

    #[test]
    fn test_table_preserves_input_order() {
        let runs = [
            run("zeta", "planned", false, "run-1"),
            run("alpha", "planned", false, "run-2"),
            run("mid", "planned", false, "run-3"),
        ];
        let out = render(&runs, &SITE);
        let first_cells: Vec<&str> = out
            .lines()
            .skip(1)
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(first_cells, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_table_has_no_trailing_whitespace() {
        let out = render(&[run("prod", "applied", false, "run-1")], &SITE);
        assert!(out.lines().all(|l| l == l.trim_end()));
        assert!(!out.ends_with('\n'));
    }
}
