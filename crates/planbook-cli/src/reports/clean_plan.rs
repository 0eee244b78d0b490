//! Six-week implementation plan for the Word editor project

use planbook_core::{Field, FileStamp, Report, ScheduleRow, StylePreset};

pub fn report() -> Report {
    Report::new("clean-plan", "Word星辉点智能编辑器项目实施计划")
        .sheet_name("项目实施计划")
        .subtitle("项目周期：6周 | 客户：国企培训部门 | 目标：正式上线运营")
        .style(StylePreset::Classic)
        .column(Field::Group, "阶段", 20.0)
        .column(Field::Period, "周次", 12.0)
        .column(Field::Tasks, "核心任务", 50.0)
        .column(Field::Deliverables, "交付成果", 35.0)
        .rows(phase_one())
        .rows(phase_two())
        .rows(phase_three())
        .footnote(
            "备注：核心功能包括AI模型集成、Word表格解析、MaxKB培训报告工作流，暂不包含用户认证系统。",
        )
        .file_stem("Word_Clean_Implementation_Plan")
        .stamp(FileStamp::Date)
}

fn phase_one() -> Vec<ScheduleRow> {
    vec![
        ScheduleRow::new("第1周")
            .group_lines(["第一阶段", "（系统安全与", "AI模型集成）"])
            .tasks([
                "系统安全加固",
                "• API安全机制实现",
                "• 内容审核和敏感词过滤",
            ])
            .deliverable("• 安全防护机制生效"),
        ScheduleRow::new("第2周")
            .tasks([
                "AI模型厂商模块",
                "• 多AI厂商接入架构设计",
                "• 集成文心一言、通义千问、智谱清言",
                "• AI模型管理界面开发",
                "• 统一调用接口实现",
            ])
            .deliverables(["• 支持3+AI模型切换", "• AI配置界面完成", "• 接口调用稳定"]),
    ]
}

fn phase_two() -> Vec<ScheduleRow> {
    vec![
        ScheduleRow::new("第3周")
            .group_lines(["第二阶段", "（核心功能开发）"])
            .tasks([
                "Word表格解析功能",
                "• 表格识别和解析引擎开发",
                "• 复杂表格处理（合并单元格、嵌套）",
                "• 表格编辑器组件",
                "• 导出格式保真优化",
            ])
            .deliverables(["• 表格解析功能完成", "• 支持主流表格格式", "• 编辑和导出正常"]),
        ScheduleRow::new("第4周")
            .tasks([
                "MaxKB工作流集成",
                "• 两个培训报告模板开发",
                "• 固定内容与AI内容混合排版",
                "• MaxKB知识库配置",
                "• 工作流调用接口实现",
            ])
            .deliverables(["• 两个模板可用", "• 工作流集成完成", "• AI生成效果良好"]),
    ]
}

fn phase_three() -> Vec<ScheduleRow> {
    vec![
        ScheduleRow::new("第5周")
            .group_lines(["第三阶段", "（功能完善与上线）"])
            .tasks([
                "高级功能开发",
                "• 批量操作和任务队列",
                "• 协同编辑基础功能",
                "• 数据统计分析",
                "",
                "用户体验优化",
                "• UI界面美化",
                "• 响应式布局",
                "• 操作引导",
            ])
            .deliverables(["• 批量功能可用", "• 界面焕然一新", "• 统计功能上线"]),
        ScheduleRow::new("第6周")
            .tasks([
                "系统测试",
                "• 功能测试和bug修复",
                "• 性能优化和压力测试",
                "• 安全扫描",
                "",
                "上线准备",
                "• 用户文档编写",
                "• 培训材料准备",
                "• Docker环境封装",
                "• 正式发布上线",
            ])
            .deliverables([
                "• 测试全部通过",
                "• 文档准备齐全",
                "• Docker镜像就绪",
                "• 系统正式上线",
            ]),
    ]
}
