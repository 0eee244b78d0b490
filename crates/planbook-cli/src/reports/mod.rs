//! Built-in report catalog

mod clean_plan;
mod dingtalk;
mod paike;

use clap::ValueEnum;
use planbook_core::Report;

/// Reports the CLI knows how to build
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportId {
    /// Six-week Word editor implementation plan
    CleanPlan,
    /// Eleven-week DingTalk workbench deployment schedule
    Dingtalk,
    /// Course-scheduling implementation plan
    Paike,
}

impl ReportId {
    pub const ALL: [ReportId; 3] = [ReportId::CleanPlan, ReportId::Dingtalk, ReportId::Paike];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportId::CleanPlan => "clean-plan",
            ReportId::Dingtalk => "dingtalk",
            ReportId::Paike => "paike",
        }
    }

    pub fn build(&self) -> Report {
        match self {
            ReportId::CleanPlan => clean_plan::report(),
            ReportId::Dingtalk => dingtalk::report(),
            ReportId::Paike => paike::report(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planbook_core::{FileStamp, MergeSpan, RowHighlight, StylePreset};
    use pretty_assertions::assert_eq;

    fn span_rows(report: &Report) -> Vec<(usize, usize)> {
        report
            .table()
            .spans
            .iter()
            .map(|s| (s.start_row, s.end_row))
            .collect()
    }

    #[test]
    fn ids_match_report_ids() {
        for id in ReportId::ALL {
            assert_eq!(id.build().id, id.as_str());
        }
    }

    #[test]
    fn clean_plan_merges_three_phases() {
        let report = ReportId::CleanPlan.build();
        assert_eq!(report.rows.len(), 6);
        assert_eq!(report.columns.len(), 4);
        assert_eq!(span_rows(&report), vec![(0, 1), (2, 3), (4, 5)]);
        assert_eq!(
            report.table().spans[0],
            MergeSpan::new(0, 1, "第一阶段\n（系统安全与\nAI模型集成）")
        );
        assert_eq!(report.sheet_names(), vec!["项目实施计划"]);
        assert_eq!(report.stamp, FileStamp::Date);
        assert_eq!(report.style, StylePreset::Classic);
        assert!(report.footnote.is_some());
    }

    #[test]
    fn clean_plan_keeps_blank_task_lines() {
        let report = ReportId::CleanPlan.build();
        let tasks = &report.table().grid[4][2];
        assert!(tasks.contains("• 数据统计分析\n\n用户体验优化"));
    }

    #[test]
    fn dingtalk_has_one_group_per_week() {
        let report = ReportId::Dingtalk.build();
        assert_eq!(report.rows.len(), 11);
        assert_eq!(report.columns.len(), 7);
        assert_eq!(report.info.len(), 8);
        assert!(report.table().spans.is_empty());
        assert_eq!(
            report.sheet_names(),
            vec!["项目排期", "风险控制", "资源配置", "技术方案"]
        );
        assert_eq!(report.stamp, FileStamp::Epoch);
        assert_eq!(report.style, StylePreset::YaHei);
    }

    #[test]
    fn dingtalk_date_cells_carry_weekday_note() {
        let report = ReportId::Dingtalk.build();
        let table = report.table();
        assert_eq!(table.grid[0][2], "9月1日-9月5日\n（星期一至五）");
        assert_eq!(table.grid[4][2], "9月29日-9月30日\n（星期一至二）");
    }

    #[test]
    fn paike_merges_phases_around_holiday() {
        let report = ReportId::Paike.build();
        assert_eq!(report.rows.len(), 13);
        assert_eq!(report.info.len(), 6);
        assert_eq!(span_rows(&report), vec![(0, 2), (3, 4), (6, 7), (8, 11)]);
        assert_eq!(report.rows[5].highlight, RowHighlight::Holiday);
        assert_eq!(report.rows[12].label(), Some("项目交付"));
        assert_eq!(report.sheet_names(), vec!["项目排期"]);
    }

    #[test]
    fn paike_holiday_row_stands_alone() {
        let report = ReportId::Paike.build();
        let table = report.table();
        assert_eq!(report.rows[5].label(), Some("国庆假期"));
        assert_eq!(table.span_at(5), None);
        assert!(table.spans.iter().all(|span| span.label != "国庆假期"));
        assert_eq!(
            report.rows[6].label(),
            Some("第二阶段（续）\n智能匹配与方案草案生成")
        );
        assert_eq!(report.rows[7].label(), None);
    }

    #[test]
    fn every_report_has_closing_notes_or_footnote() {
        for id in ReportId::ALL {
            let report = id.build();
            assert!(
                !report.closing_notes.is_empty() || report.footnote.is_some(),
                "{} has nothing to say",
                id.as_str()
            );
        }
    }

    #[test]
    fn value_enum_names() {
        let names: Vec<String> = ReportId::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|p| p.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["clean-plan", "dingtalk", "paike"]);
    }
}
