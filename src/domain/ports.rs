use crate::domain::model::{OutputFormat, RawSubmission};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn event_name(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn input_files(&self) -> &[String];
    fn inline_submissions(&self) -> Vec<RawSubmission>;
    fn output_format(&self) -> OutputFormat;
    fn strict(&self) -> bool;
}

/// 回覆來源，依輸入順序回傳原始資料。
/// 外層錯誤代表整個來源無法讀取；內層錯誤只影響單一列。
pub trait SubmissionSource {
    fn submissions(&self) -> Result<Vec<Result<RawSubmission>>>;
}
