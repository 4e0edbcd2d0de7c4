use crate::commands::{CmdMessage, CmdResult, ShelfPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &ShelfPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized bookshelf at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_data_dir() {
        let temp = TempDir::new().unwrap();
        let paths = ShelfPaths {
            data_dir: temp.path().join("a").join("b"),
        };

        run(&paths).unwrap();
        assert!(paths.data_dir.is_dir());
    }
}
