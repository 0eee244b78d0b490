//! Course-scheduling implementation plan, September to mid-November

use planbook_core::{Field, FileStamp, Report, ScheduleRow, StylePreset};

const WEEKDAYS: &str = "（星期一至五）";

pub fn report() -> Report {
    Report::new("paike", "一键排课项目实施计划排期表 - 2025年9月-11月")
        .sheet_name("项目排期")
        .style(StylePreset::YaHei)
        .info("项目名称", "一键排课项目实施计划")
        .info("项目周期", "2025年9月1日-11月15日（约11周，考虑国庆假期）")
        .info("项目目标", "开发并部署一键排课系统，实现智能化课程安排")
        .info("技术架构", "前后端分离架构 + AI算法 + 数据库系统")
        .info("工作安排", "需求分析→系统设计→开发实施→测试部署→培训交付")
        .info("假期安排", "国庆节10月1日-7日放假，周末正常休息")
        .column(Field::Group, "阶段", 15.0)
        .column(Field::Period, "时间", 12.0)
        .column(Field::DateRange, "日期", 18.0)
        .column(Field::Tasks, "核心任务", 40.0)
        .column(Field::Deliverables, "交付成果", 35.0)
        .column(Field::Owner, "负责人", 15.0)
        .column(Field::Note, "备注", 20.0)
        .rows(foundation())
        .rows(matching())
        .rows(delivery())
        .file_stem("Schedule_Paike_2025_Sep_Nov")
        .stamp(FileStamp::Epoch)
        .closing_note("工作安排：")
        .closing_note("- 第一阶段（9月1-14日）：需求分析与方案设计")
        .closing_note("- 第二阶段（9月15日-10月31日）：系统开发（国庆放假7天）")
        .closing_note("- 第三阶段（11月1-15日）：测试部署与交付")
        .closing_note("特别提醒：")
        .closing_note("- 国庆节10月1-7日放假，注意提前安排工作")
        .closing_note("- 周末正常休息，工作日全力推进")
        .closing_note("- 11月15日（周六）项目交付，需要加班一天")
}

/// Data foundation and retrieval engine
fn foundation() -> Vec<ScheduleRow> {
    vec![
        ScheduleRow::new("第1周")
            .group_lines(["第一阶段", "基础架构与核心数据引擎"])
            .dates("9月1日-9月5日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 项目启动与数据基础调研",
                "• 定义并搭建\"智能资源中心\"数据库",
                "• 开发初版数据同步脚本，实现从OA系统到本地数据库的一次性数据迁移",
            ])
            .deliverables([
                "• 项目代码骨架",
                "• 可运行的数据库实例",
                "• 能够拉取全量资源数据的同步脚本",
            ])
            .owner("开发团队")
            .note("项目启动与调研"),
        ScheduleRow::new("第2周")
            .dates("9月8日-9月12日")
            .date_note(WEEKDAYS)
            .tasks([
                "• RAG引擎构建：数据处理与向量化",
                "• 为资源（教师/现场教学）设计并实现文本预处理流程",
                "• 集成向量嵌入模型，开发向量化脚本",
                "• 将所有资源处理并存入向量数据库(Vector Store)",
            ])
            .deliverables([
                "• 一套完整的数据处理与向量化流程",
                "• 包含所有资源的、可被检索的向量索引库",
            ])
            .owner("开发团队")
            .note("RAG引擎构建"),
        ScheduleRow::new("第3周")
            .dates("9月15日-9月19日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 节点一开发：需求解析",
                "• 设计策略指令集的JSON结构",
                "• 开发需求表单的解析逻辑",
                "• 集成Web acp搜索工具，实现客户背景（政府/国企）的自动化分析",
                "• 节点一完善与检索测试",
            ])
            .deliverables([
                "• \"节点一\"模块雏形，能将原始需求转化为结构化的策略指令集",
                "• 一个经过测试、功能完备的\"节点一\"",
                "• 初步的检索质量评估报告",
            ])
            .owner("开发团队")
            .note("节点一开发完善"),
    ]
}

/// Matching and draft generation, interrupted by the National Day holiday
fn matching() -> Vec<ScheduleRow> {
    vec![
        ScheduleRow::new("第4周")
            .group_lines(["第二阶段", "智能匹配与方案草案生成"])
            .dates("9月22日-9月26日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 节点二开发：硬性过滤与语义检索",
                "• 开发资源硬性过滤器模块（地点、人数、开发状态等）",
                "• 将硬性过滤与语义检索结合，形成两步筛选流程",
                "• 输出满足硬性条件并按主题相关度排序的候选资源列表",
            ])
            .deliverable("• 能返回符合硬性约束的相关候选资源的模块")
            .owner("开发团队")
            .note("节点二开发"),
        ScheduleRow::new("第5周")
            .dates("9月29日-9月30日")
            .date_note("（星期一二）")
            .tasks([
                "• 节点二完善：专家经验评分模型",
                "• 设计包含完整评分维度的资源数据结构",
                "• 实现多维度专家评分模型（五有、次新、多样性、模板、反馈）",
            ])
            .deliverable("• 功能完整的\"节点二\"，能输出包含综合得分和推荐理由的候选资源列表")
            .owner("开发团队")
            .note("国庆前完成，10月1-7日放假"),
        ScheduleRow::new("国庆")
            .group("国庆假期")
            .holiday()
            .dates("10月1日-10月7日")
            .date_note("（国庆7天假期）")
            .tasks(["• 国庆节放假休息", "• 团队休整充电", "• 准备节后开发工作"])
            .deliverables(["• 假期休息", "• 准备节后工作计划"])
            .owner("全体人员")
            .note("国庆节法定假期"),
        ScheduleRow::new("第6周")
            .group_lines(["第二阶段（续）", "智能匹配与方案草案生成"])
            .dates("10月8日-10月10日")
            .date_note("（星期三至五）")
            .tasks([
                "• 利用LLM生成高度相关的\"一句话推荐理由\"",
                "• 节点三开发：约束求解引擎",
                "• 设计日程编排的数据结构（日程表）",
            ])
            .deliverable("• \"节点三\"雏形，能根据候选资源和核心约束，生成一个逻辑通顺的方案草案")
            .owner("开发团队")
            .note("节后功能开发"),
        ScheduleRow::new("第7周")
            .dates("10月13日-10月17日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 实现核心硬性约束的校验逻辑（配比、预算、新资源数量等）",
                "• 开发一个基于贪心或启发式搜索的初步日程生成算法",
                "• 节点三完善：回溯与优化",
                "• 实现所有排程逻辑约束（如抵达/返程日规则、调研式教学位置）",
            ])
            .deliverables(["• 一个具备自我修复能力的日程生成引擎", "• 第二阶段评审"])
            .owner("开发团队")
            .note("约束求解完善"),
    ]
}

/// Optimization, integration, deployment and handover
fn delivery() -> Vec<ScheduleRow> {
    vec![
        ScheduleRow::new("第8周")
            .group_lines(["第三阶段", "方案优化、整合与部署"])
            .dates("10月20日-10月24日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 引入软性约束作为优化目标（如主题连续性）",
                "• 开发回溯机制，当生成失败时，能自动尝试次优选项或向上游请求更多资源",
                "• 节点四开发：方案智能美化",
                "• 开发\"节点四\"模块，接收日程草案",
            ])
            .deliverable("• 一个能将方案草案自动优化和包装成专业文档内容的\"节点四\"")
            .owner("全栈团队")
            .note("方案优化"),
        ScheduleRow::new("第9周")
            .dates("10月27日-10月31日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 设计并实现针对不同美化任务（模块标题、课程点题、推荐理由重写）的LLM Prompts",
                "• 实现自动化审核逻辑，对照Checklist进行程序化校验",
                "• 端到端流程整合与测试",
                "• 将四个独立的智能节点串联成一个完整的自动化工作流",
            ])
            .deliverables([
                "• 一个可从原始需求一步生成到最终方案的完整系统",
                "• 端到端测试报告",
            ])
            .owner("全栈团队")
            .note("系统集成"),
        ScheduleRow::new("第10周")
            .dates("11月3日-11月7日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 构建并管理在节点间流转的\"全局方案状态\"对象",
                "• 收集真实的OA需求作为测试集，进行完整的端到端流程测试",
                "• 系统调优与最终评估",
                "• 组织业务专家对测试结果进行人工评估",
            ])
            .deliverables([
                "• 一个经过验证和调优的、性能稳定的系统",
                "• 与下游系统对接的标准数据接口",
            ])
            .owner("测试团队")
            .note("系统测试验证"),
        ScheduleRow::new("第11周")
            .dates("11月10日-11月14日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 根据反馈，精调评分权重、LLM Prompts和业务规则",
                "• 开发最终的格式化输出模块，确保数据能被OA系统无缝导入",
                "• 部署、文档与交付",
                "• 配置生产环境，并通过API接口部署整个系统",
                "• 编写详细的技术实现文档和给业务团队的用户操作手册",
            ])
            .deliverables([
                "• 生产环境中可用的\"一键排课\"系统v1.0",
                "• 完整的技术与用户文档",
            ])
            .owner("运维+培训团队")
            .note("部署培训交付"),
        ScheduleRow::new("收尾")
            .group("项目交付")
            .dates("11月15日（星期六）")
            .tasks([
                "• 进行项目总结，正式交付v1.0版本",
                "• 客户验收签字，项目结项",
                "• 项目归档和经验分享",
            ])
            .deliverables(["• 项目正式交付", "• 验收文档签署", "• 项目归档完成"])
            .owner("全体团队")
            .note("项目圆满完成"),
    ]
}
