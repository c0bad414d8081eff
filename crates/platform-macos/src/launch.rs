/// Open `urls` in the application identified by `bundle_id`, passing any
/// extra launch arguments after `--args`.
pub fn open_in_app(bundle_id: &str, urls: &[&str], args: &[&str]) -> Result<(), String> {
    let mut command = std::process::Command::new("open");
    command.arg("-b").arg(bundle_id);
    command.args(urls);
    if !args.is_empty() {
        command.arg("--args");
        command.args(args);
    }
    let output = command
        .output()
        .map_err(|error| format!("failed to execute open: {error}"))?;
    if output.status.success() {
        Ok(())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).trim().to_string())
    }
}
