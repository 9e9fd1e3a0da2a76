use anyhow::Result;
use dialoguer::Input;
use std::path::PathBuf;

pub(crate) fn prompt_path() -> Result<PathBuf> {
    let raw: String = Input::new()
        .with_prompt("Enter the path to the text file")
        .interact_text()?;
    Ok(PathBuf::from(raw.trim()))
}

pub(crate) fn prompt_summary_length(default: usize) -> Result<usize> {
    let value: usize = Input::new()
        .with_prompt("Enter the number of sentences for the summary")
        .default(default)
        .interact_text()?;
    Ok(value)
}
