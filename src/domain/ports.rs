use crate::utils::error::Result;

/// 逐行讀寫的終端介面
pub trait Console {
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// 讀取一行；輸入結束時回傳 `Ok(None)`
    fn read_line(&mut self) -> Result<Option<String>>;
}

pub trait Clock {
    fn current_year(&self) -> i32;
}

pub trait ConfigProvider {
    fn reference_birth_year(&self) -> i32;
    fn reference_person(&self) -> &str;
    fn max_attempts(&self) -> Option<u32>;
}
