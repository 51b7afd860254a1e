/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 分析服务与文档渲染服务的基础 URL
    pub api_base_url: String,
    /// 预填表单的录入文件（TOML）
    pub intake_file: String,
    /// 结果视图的输出文件
    pub result_html_file: String,
    /// PDF 导出的固定文件名
    pub pdf_output_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            intake_file: "intake.toml".to_string(),
            result_html_file: "result.html".to_string(),
            pdf_output_file: "Beresfords_Life_Strategy.pdf".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(default.api_base_url),
            intake_file: std::env::var("INTAKE_FILE").unwrap_or(default.intake_file),
            result_html_file: std::env::var("RESULT_HTML_FILE").unwrap_or(default.result_html_file),
            pdf_output_file: std::env::var("PDF_OUTPUT_FILE").unwrap_or(default.pdf_output_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
