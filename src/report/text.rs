//! Plain-text report rendering

use super::{Report, ReportOptions, RowStatus};
use crate::fmt::{pad_name, RULE};
use console::style;
use std::io::{self, Write};

/// Renders a [`Report`] as text, sections in fixed order:
/// only-new, increased, unchanged, decreased, only-old
pub struct TextReporter {
    options: ReportOptions,
}

impl TextReporter {
    /// Create a reporter with the given options
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Write the report to `out`
    pub fn render<W: Write>(&self, report: &Report, out: &mut W) -> io::Result<()> {
        let color = self.options.color;

        writeln!(
            out,
            "{}",
            style(format!("* ONLY IN NEW: {}", report.only_new.len()))
                .red()
                .force_styling(color)
        )?;
        for asset in &report.only_new {
            writeln!(out, "    {} : {}", asset.name, asset.size)?;
        }

        writeln!(
            out,
            "{}",
            style(format!("* INCREASED: {}", report.increased.len()))
                .red()
                .force_styling(color)
        )?;
        for increased in &report.increased {
            writeln!(out, "    {}: {}", increased.asset.name, increased.asset.delta)?;
            writeln!(
                out,
                "        {}\tCurrent\tBase\tDiff",
                pad_name("Module", self.options.name_width)
            )?;
            writeln!(out, "        {}", RULE)?;
            for row in &increased.modules {
                let line = format!(
                    "        {}\t{}\t{}\t{}",
                    pad_name(&row.name, self.options.name_width),
                    row.current,
                    row.base,
                    row.delta
                );
                let styled = match row.status {
                    RowStatus::Regression => style(line).red(),
                    RowStatus::Improvement => style(line).green(),
                };
                writeln!(out, "{}", styled.force_styling(color))?;
                for file in &row.constituents {
                    writeln!(out, "            {}", style(file).dim().force_styling(color))?;
                }
            }
            writeln!(out, "        {}", RULE)?;
        }

        writeln!(
            out,
            "{}",
            style(format!("* UNCHANGED: {}", report.unchanged.count))
                .yellow()
                .force_styling(color)
        )?;
        for name in &report.unchanged.names {
            writeln!(out, "    {}", name)?;
        }

        writeln!(
            out,
            "{}",
            style(format!("* DECREASED: {}", report.decreased.count))
                .green()
                .force_styling(color)
        )?;
        for asset in &report.decreased.assets {
            writeln!(out, "    {} :  {}", asset.name, asset.delta)?;
        }

        writeln!(
            out,
            "{}",
            style(format!("* ONLY IN OLD: {}", report.only_old.len()))
                .green()
                .force_styling(color)
        )?;
        for asset in &report.only_old {
            writeln!(out, "    {} : {}", asset.name, asset.size)?;
        }

        Ok(())
    }

    /// Render the report into a string
    pub fn render_to_string(&self, report: &Report) -> io::Result<String> {
        let mut buf = Vec::new();
        self.render(report, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{
        DecreasedSection, DeltaAsset, IncreasedAsset, ModuleRow, SizedAsset, UnchangedSection,
    };

    fn sample_report() -> Report {
        Report {
            cutoff: 0,
            only_new: vec![SizedAsset {
                name: "new.js".to_string(),
                size: 42,
            }],
            increased: vec![IncreasedAsset {
                asset: DeltaAsset {
                    name: "app.js".to_string(),
                    old_size: 100,
                    new_size: 150,
                    delta: 50,
                },
                module_delta_sum: 20,
                modules: vec![
                    ModuleRow {
                        name: "index.js + 1 modules".to_string(),
                        current: 120,
                        base: 100,
                        delta: 20,
                        status: RowStatus::Regression,
                        constituents: vec!["index.js".to_string(), "util.js".to_string()],
                    },
                    ModuleRow {
                        name: "b.js".to_string(),
                        current: 5,
                        base: 9,
                        delta: -4,
                        status: RowStatus::Improvement,
                        constituents: vec![],
                    },
                ],
            }],
            unchanged: UnchangedSection {
                count: 1,
                names: vec!["same.js".to_string()],
            },
            decreased: DecreasedSection {
                count: 1,
                assets: vec![DeltaAsset {
                    name: "lib.js".to_string(),
                    old_size: 30,
                    new_size: 20,
                    delta: -10,
                }],
            },
            only_old: vec![SizedAsset {
                name: "old.js".to_string(),
                size: 7,
            }],
        }
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let text = TextReporter::new(ReportOptions::default())
            .render_to_string(&sample_report())
            .unwrap();

        let positions: Vec<usize> = [
            "* ONLY IN NEW: 1",
            "* INCREASED: 1",
            "* UNCHANGED: 1",
            "* DECREASED: 1",
            "* ONLY IN OLD: 1",
        ]
        .iter()
        .map(|header| text.find(header).expect(header))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_asset_lines() {
        let text = TextReporter::new(ReportOptions::default())
            .render_to_string(&sample_report())
            .unwrap();

        assert!(text.contains("    new.js : 42\n"));
        assert!(text.contains("    app.js: 50\n"));
        assert!(text.contains("    same.js\n"));
        assert!(text.contains("    lib.js :  -10\n"));
        assert!(text.contains("    old.js : 7\n"));
    }

    #[test]
    fn test_module_table_layout() {
        let options = ReportOptions {
            name_width: 10,
            ..ReportOptions::default()
        };
        let text = TextReporter::new(options)
            .render_to_string(&sample_report())
            .unwrap();

        assert!(text.contains("        Module    \tCurrent\tBase\tDiff\n"));
        assert!(text.contains("        index.js +\t120\t100\t20\n"));
        assert!(text.contains("            index.js\n            util.js\n"));
        assert!(text.contains("        b.js      \t5\t9\t-4\n"));
        assert_eq!(text.matches(RULE).count(), 2);
    }

    #[test]
    fn test_no_ansi_codes_without_color() {
        let text = TextReporter::new(ReportOptions::default())
            .render_to_string(&sample_report())
            .unwrap();
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_color_marks_regressions_and_improvements() {
        let options = ReportOptions {
            color: true,
            ..ReportOptions::default()
        };
        let text = TextReporter::new(options)
            .render_to_string(&sample_report())
            .unwrap();

        let regression = text.lines().find(|l| l.contains("\t120\t100\t20")).unwrap();
        let improvement = text.lines().find(|l| l.contains("\t5\t9\t-4")).unwrap();
        assert!(regression.starts_with("\u{1b}[31m"));
        assert!(improvement.starts_with("\u{1b}[32m"));
    }

    #[test]
    fn test_empty_report_prints_all_headers() {
        let report = Report {
            cutoff: 0,
            only_new: vec![],
            increased: vec![],
            unchanged: UnchangedSection {
                count: 0,
                names: vec![],
            },
            decreased: DecreasedSection {
                count: 0,
                assets: vec![],
            },
            only_old: vec![],
        };

        let text = TextReporter::new(ReportOptions::default())
            .render_to_string(&report)
            .unwrap();
        assert_eq!(
            text,
            "* ONLY IN NEW: 0\n* INCREASED: 0\n* UNCHANGED: 0\n* DECREASED: 0\n* ONLY IN OLD: 0\n"
        );
    }
}
