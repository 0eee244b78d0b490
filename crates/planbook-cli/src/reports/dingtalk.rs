//! Eleven-week DingTalk workbench deployment schedule

use planbook_core::{
    Field, FileStamp, NoteSection, NoteSheet, Report, ScheduleRow, StaticTable, StylePreset,
};

const WEEKDAYS: &str = "（星期一至五）";

pub fn report() -> Report {
    Report::new(
        "dingtalk",
        "Word星辉点钉钉工作台部署排期表 - 2025年9月至11月（完整版：11周流程）",
    )
    .sheet_name("项目排期")
    .style(StylePreset::YaHei)
    .info("项目名称", "Word星辉点智能编辑器钉钉工作台部署")
    .info("项目周期", "2025年9月1日-11月14日（11周）")
    .info("项目目标", "将Word星辉点项目部署到钉钉工作台，实现仅通过钉钉访问的安全控制")
    .info("技术架构", "React18 + Node.js + Express + TypeScript + 钉钉H5微应用")
    .info(
        "工作安排",
        "需求调研分析→功能实现（多阶段）→平台认知→架构设计→集成调试→UI/UX优化→培训交付（11周完整流程）",
    )
    .info("当前状态", "基础功能开发完成，包含AI生成、模板系统、Word导入导出、MaxKB集成")
    .info("系统特点", "无需用户登录系统，不需要集成钉钉免登功能，仅需嵌入钉钉工作台")
    .info("开发环境", "钉钉企业内部应用支持HTTP，可使用localhost或内网穿透，无需SSL证书")
    .column(Field::Group, "阶段", 15.0)
    .column(Field::Period, "周次", 8.0)
    .column(Field::DateRange, "日期", 12.0)
    .column(Field::Tasks, "核心任务", 35.0)
    .column(Field::Deliverables, "交付成果", 30.0)
    .column(Field::Owner, "负责人", 12.0)
    .column(Field::Note, "备注", 20.0)
    .rows(weeks())
    .sheet(risk_sheet())
    .sheet(resource_sheet())
    .sheet(tech_sheet())
    .file_stem("DingTalk_Schedule_2025_Sep_to_Nov")
    .stamp(FileStamp::Epoch)
    .closing_note("工作安排（11周完整版）：")
    .closing_note("- 第1周（9月1-5日）：需求调研分析")
    .closing_note("- 第2周（9月8-12日）：功能实现1-数据库连接")
    .closing_note("- 第3周（9月15-19日）：平台认知+页面部署")
    .closing_note("- 第4周（9月22-26日）：功能实现2")
    .closing_note("- 第5周（9月29-30日）：架构设计与应用优化")
    .closing_note("- 第6周（10月6-10日）：集成调试+在线部署")
    .closing_note("- 第7周（10月13-17日）：功能实现3-导出和生成")
    .closing_note("- 第8周（10月20-24日）：功能实现4-知识库集成")
    .closing_note("- 第9周（10月27-31日）：UI/UX设计优化")
    .closing_note("- 第10周（11月3-7日）：原码应用第三周培训")
    .closing_note("- 第11周（11月10-14日）：验收测试和交付")
    .closing_note("重要简化：系统无需登录功能，不需要集成钉钉免登，仅需嵌入工作台")
    .closing_note("安全保障：确保只能通过钉钉工作台访问，其他方式完全禁用")
}

fn weeks() -> Vec<ScheduleRow> {
    vec![
        ScheduleRow::new("9月1-5日")
            .group_lines(["第一周", "需求调研分析"])
            .dates("9月1日-9月5日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 全功能模块「智能文档」的调研",
                "• 功能规划和项目指标（文本生成和知识库集成等）方面梳理",
                "• 建构网站系统框架（前端：React，后端：Express）",
            ])
            .deliverables([
                "可运行的前端页面框架",
                "",
                "能在前端页面通过MaxKb进行搜索",
                "",
                "实现前端和后端的网络请求框架",
            ])
            .owner("项目团队")
            .note("需求调研，了解真实需求"),
        ScheduleRow::new("9月8-12日")
            .group_lines(["第二周", "功能实现1"])
            .dates("9月8日-9月12日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 功能素：编辑（保存）：设计全面填充文本和AI填充模板。",
                "• 基础编辑功能构建：添加组块绘画。",
                "• 自制组块系统和界面大小调整系统（Render Resize）",
            ])
            .deliverables([
                "• 素以填充（插入）功能代替应用数据集储存文件；",
                "• 包含新的「填充」功能数据统合包。",
            ])
            .owner("开发团队")
            .note("核心功能开发"),
        ScheduleRow::new("9月15-19日")
            .group_lines(["第三周", "平台认知+页面部署"])
            .dates("9月15日-9月19日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 以对模板功能深入认识和修改。",
                "• 设置内容学习和模板的输入。",
                "• Webcom web接口文档（网页，调用服务，后台接口 MaxKb）API",
            ])
            .deliverable("• 平台一期认知UI。全功能交互系统完成和认知支付功能数据总集")
            .owner("前端开发团队")
            .note("界面优化和集成"),
        ScheduleRow::new("9月22-26日")
            .group_lines(["第四周", "功能实现2"])
            .dates("9月22日-9月26日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 企业规则模板功能（宏观，最细分等级）的CRUD。",
                "• 解决内容保存，临床疗程成果分析展示。",
                "• 解析平台一主视图机理模式，HTML创建多种不同预定项模块在复杂任务中保准",
            ])
            .deliverables(["对项目保留详细设置和架构。", "", "第一阶段升级"])
            .owner("后端开发团队")
            .note("功能完善"),
        ScheduleRow::new("9月29-30日")
            .group_lines(["第五周", "架构设计与应用优化"])
            .dates("9月29日-9月30日")
            .date_note("（星期一至二）")
            .tasks([
                "• 有关新增能反应反应模板设计（通过一手数据和工程中相应功能）",
                "• 机器接口最完整后端（监测网云表最复杂，部署进化调试和信息等）",
                "• 配置分配并行关系（通过数据动态定立）接口分层标准规范（如端模调整增强项模块）",
            ])
            .deliverables([
                "• 展现识别现有的设计方式现有数据架构等表（支持创建多种）的重构综合报告，",
                "• 分表方法最终应认定数据库架构和数据并行化系统",
            ])
            .owner("架构团队")
            .note("架构优化和设计"),
        ScheduleRow::new("10月6-10日")
            .group_lines(["第六周", "集成调试+在线部署"])
            .dates("10月6日-10月10日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 对目标功能和实施流程打包策略（启用，小装，访问目录，蓝板，启用）",
                "• 动态123支持现流程预构架-——功能地球联络。",
            ])
            .deliverables([
                "对遗数据库（系统，目标）并且现有多标准不需升级（不需要进行原接触功能分离）",
                "• 如果还面临大幅度表示集和事件现实，将可以作为自由的数据集提供控制",
            ])
            .owner("运维团队")
            .note("系统部署和优化"),
        ScheduleRow::new("10月13-17日")
            .group_lines(["第七周", "功能实现3"])
            .dates("10月13日-10月17日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 分页输出编程最适量服务（AI测层）",
                "• 全增的生成机架建设原版应用，仅对于建设建和文件。",
                "• 完全一体下少出式系统式样管理改分网络自主建系统。",
            ])
            .deliverables(["• 目标实现，智能监视组拿到目标文件上。", "• 综合应用设计系统"])
            .owner("开发团队")
            .note("导出功能完善"),
        ScheduleRow::new("10月20-24日")
            .group_lines(["第八周", "功能实现4"])
            .dates("10月20日-10月24日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 实现最后建设管理和维护功能测试要求（已经完成），解析对策文件。",
                "• 开发AI仓库（前端端设计）基于多服务更系统。",
                "• 分析多个整数计划（建统类，智能保护和交互设建议和设计完成）",
            ])
            .deliverables(["• 功能整合，应用，效率和进度应用。", "• 结算上线升级功能"])
            .owner("全栈开发团队")
            .note("知识库功能集成"),
        ScheduleRow::new("10月27-31日")
            .group_lines(["第九周", "UI/UX设计优化"])
            .dates("10月27日-10月31日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 设计用户体验并且编写产权更让人大认识。",
                "• 提请全新，精准面的设计（UX Elements如版本面）。",
                "• 分导解性能并设置用更好，更独具数服用和完成和用户总结。",
            ])
            .deliverables(["5个主要系统能清体质高度推数据。", "• 分享能系统的应对总的规划（暂新）"])
            .owner("UI/UX设计团队")
            .note("用户体验优化"),
        ScheduleRow::new("11月3-7日")
            .group_lines(["第十周", "原码应用第三周培训"])
            .dates("11月3日-11月7日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 配置分别标配，示例定义和对应的交叉需复要素文件。",
                "• 展示源数据变更文件对Scripting功能创建分的时间总体数量基。",
                "• 分叉可提取制度，企业版用户，调度表。",
            ])
            .deliverables(["可展现设计大体代代服务。", "• 评阶代表评评"])
            .owner("培训团队")
            .note("系统培训和交付"),
        ScheduleRow::new("11月10-14日")
            .group_lines(["第十一周", "验收测试和交付"])
            .dates("11月10日-11月14日")
            .date_note(WEEKDAYS)
            .tasks([
                "• 对用户和完整制造测试数据（已完整数据路线上文分析）。",
                "• 创建应用与试运行ADS设计全面用程指标，应用",
                "• 主要模式可以通过多个数据测试。对设置对项明原后模块合作对应",
            ])
            .deliverables(["• 项目验收通过并正式对接系统地点和平稳", "• 模板综合项目评价"])
            .owner("项目团队+客户")
            .note("最终验收交付"),
    ]
}

fn risk_sheet() -> StaticTable {
    StaticTable::new("风险控制")
        .headers(["风险类型", "风险描述", "影响程度", "应对措施", "责任人", "监控指标"])
        .row([
            "技术风险",
            "钉钉嵌入兼容性问题",
            "低",
            "钉钉H5微应用技术成熟稳定；无需复杂API集成；风险很低",
            "技术负责人",
            "嵌入访问成功率>99%",
        ])
        .row([
            "安全风险",
            "访问控制被绕过",
            "中",
            "前端检测钉钉环境+后端验证User-Agent+访问来源控制",
            "安全负责人",
            "非钉钉访问检测为0",
        ])
        .row([
            "网络风险",
            "内网穿透稳定性问题",
            "低",
            "使用钉钉官方内网穿透工具；准备localhost备用方案",
            "运维负责人",
            "网络连接稳定率>99%",
        ])
        .row([
            "性能风险",
            "AI生成功能在钉钉环境响应慢",
            "低",
            "钉钉容器性能良好；继续优化AI调用和缓存策略",
            "后端负责人",
            "平均响应时间<3秒",
        ])
        .row([
            "兼容性风险",
            "钉钉容器环境兼容问题",
            "低",
            "钉钉H5容器标准化程度高；重点测试移动端和PC端",
            "前端负责人",
            "主流版本兼容率100%",
        ])
        .row([
            "时间风险",
            "5周内无法完成所有优化",
            "低",
            "合理分配5周时间，充分优化各模块；预留缓冲时间",
            "项目经理",
            "按时完成率>95%",
        ])
        .row([
            "依赖风险",
            "MaxKB服务不稳定",
            "中",
            "增加重试机制；准备降级方案；与MaxKB团队建立沟通机制",
            "技术负责人",
            "MaxKB可用率>99.5%",
        ])
        .row([
            "用户体验风险",
            "钉钉环境下用户体验不佳",
            "中",
            "充分的用户测试和反馈收集；快速响应用户问题",
            "产品负责人",
            "用户满意度>90%",
        ])
        .widths([12.0, 25.0, 10.0, 40.0, 12.0, 20.0])
}

fn resource_sheet() -> StaticTable {
    StaticTable::new("资源配置")
        .headers(["资源类型", "具体配置", "数量", "工作量", "关键技能", "备注"])
        .row([
            "人力资源",
            "前端开发工程师",
            "2人",
            "全职4周",
            "React + TypeScript + 钉钉H5开发",
            "负责界面适配和钉钉集成",
        ])
        .row([
            "",
            "后端开发工程师",
            "2人",
            "全职4周",
            "Node.js + Express + 钉钉API",
            "负责后端接口和安全控制",
        ])
        .row([
            "",
            "测试工程师",
            "1人",
            "全职2周",
            "钉钉应用测试 + 安全测试",
            "负责功能和安全测试",
        ])
        .row([
            "",
            "运维工程师",
            "1人",
            "兼职4周",
            "Docker + Nginx + 钉钉部署",
            "负责环境配置和上线部署",
        ])
        .row([
            "",
            "产品经理",
            "1人",
            "兼职4周",
            "钉钉工作台产品经验",
            "负责需求确认和用户培训",
        ])
        .row([
            "",
            "安全专家",
            "1人",
            "兼职1周",
            "企业应用安全 + 钉钉安全",
            "负责安全方案设计和审核",
        ])
        .row([
            "技术资源",
            "钉钉企业账号",
            "1个",
            "1个月",
            "企业级权限",
            "需要管理员权限配合",
        ])
        .row([
            "",
            "开发测试环境",
            "2套",
            "1个月",
            "Docker容器化部署",
            "开发环境 + 预生产环境",
        ])
        .row([
            "",
            "生产服务器",
            "1套",
            "长期",
            "高可用配置",
            "支持钉钉工作台访问的生产环境",
        ])
        .row(["", "SSL证书", "1个", "长期", "HTTPS加密", "钉钉要求必须HTTPS访问"])
        .row([
            "外部依赖",
            "千问AI服务",
            "按需",
            "长期",
            "API调用额度",
            "确保AI生成功能稳定",
        ])
        .row(["", "MaxKB服务", "按需", "长期", "知识库访问", "确保知识库功能正常"])
        .row([
            "",
            "钉钉技术支持",
            "按需",
            "项目期间",
            "钉钉官方技术咨询",
            "遇到问题时的技术支持",
        ])
        .widths([12.0, 20.0, 8.0, 12.0, 25.0, 25.0])
}

fn tech_sheet() -> NoteSheet {
    NoteSheet::new("技术方案")
        .section(
            NoteSection::new("钉钉集成技术方案")
                .entry("1. 应用类型选择", "H5微应用 - 将现有Web应用嵌入钉钉工作台")
                .entry(
                    "2. 身份认证方案",
                    "钉钉免登 - 通过钉钉JSAPI获取用户身份，移除原有登录系统",
                )
                .entry(
                    "3. 安全访问控制",
                    "多重验证：域名白名单 + Referer检查 + 钉钉Token验证 + iframe防护",
                )
                .entry("4. 界面适配方案", "响应式设计适配钉钉容器，优化移动端体验")
                .entry("5. API集成方案", "集成钉钉JSAPI：免登、分享、通知、文件上传等"),
        )
        .section(
            NoteSection::new("部署架构方案")
                .entry("1. 现有架构保持", "React前端 + Node.js后端 + Express API")
                .entry(
                    "2. 新增钉钉适配层",
                    "前端：钉钉JSAPI集成模块；后端：钉钉身份验证中间件",
                )
                .entry("3. 安全控制层", "Nginx反向代理 + 域名白名单 + 访问控制策略")
                .entry("4. 监控告警", "应用性能监控 + 异常告警 + 访问日志分析"),
        )
        .section(
            NoteSection::new("关键技术要点")
                .entry(
                    "1. 钉钉免登实现",
                    "dd.ready -> dd.runtime.permission.requestAuthCode -> 后端验证",
                )
                .entry(
                    "2. 安全访问控制",
                    "if (referer !== dingtalk && !dingtalkToken) { return 403; }",
                )
                .entry("3. 移动端适配", "viewport设置 + rem适配 + touch事件优化")
                .entry("4. 性能优化", "代码分割 + 懒加载 + CDN加速 + 缓存策略"),
        )
        .section(
            NoteSection::new("上线部署流程")
                .entry("1. 钉钉应用创建", "管理员在钉钉开放平台创建H5微应用")
                .entry("2. 域名配置", "添加应用域名到钉钉白名单")
                .entry("3. 权限申请", "申请所需的JSAPI权限")
                .entry("4. 应用发布", "设置应用图标、描述、可见范围")
                .entry("5. 工作台配置", "将应用添加到企业工作台"),
        )
        .widths(20.0, 60.0)
}
