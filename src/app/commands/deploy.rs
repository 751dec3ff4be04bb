//! Deploy command - generates artifacts, then runs the deployment script.

use std::path::Path;

use super::generate;
use crate::app::console;
use crate::domain::{AppError, GenerateOptions};
use crate::ports::ScriptRunner;

/// Execute the deploy command.
///
/// Generation must succeed in full before the script is run. The script
/// inherits the caller's standard streams; its exit status is surfaced as
/// the command result.
pub fn execute(
    config_path: &Path,
    options: &GenerateOptions,
    runner: &impl ScriptRunner,
) -> Result<(), AppError> {
    generate::execute(config_path, options)?;

    let script = options.output_dir.join("deploy.sh");
    if !script.exists() {
        return Err(AppError::ScriptNotFound(script.display().to_string()));
    }

    console::info("Starting deployment...");

    let script_arg = script.display().to_string();
    let mut args = vec![script_arg.as_str()];
    if options.dry_run {
        args.push("--dry-run");
    }

    let code = runner.run("bash", &args, None)?;
    if code != 0 {
        return Err(AppError::ScriptFailed(code));
    }

    console::info("Application deployed successfully!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::tempdir;

    use crate::services::templates;

    struct MockRunner {
        exit_code: i32,
        calls: RefCell<Vec<(String, Vec<String>)>>,
    }

    impl MockRunner {
        fn new(exit_code: i32) -> Self {
            Self { exit_code, calls: RefCell::new(Vec::new()) }
        }
    }

    impl ScriptRunner for MockRunner {
        fn run(&self, program: &str, args: &[&str], _cwd: Option<&Path>) -> Result<i32, AppError> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.iter().map(|s| s.to_string()).collect()));
            Ok(self.exit_code)
        }

        fn capture(&self, _program: &str, _args: &[&str]) -> Result<String, AppError> {
            Ok(String::new())
        }
    }

    fn prepared_options(root: &Path) -> GenerateOptions {
        let options = GenerateOptions {
            output_dir: root.join("generated"),
            template_dir: root.join("templates"),
            ..Default::default()
        };
        templates::materialize(&options.template_dir).unwrap();
        options
    }

    #[test]
    fn runs_generated_script_with_bash() {
        let temp = tempdir().unwrap();
        let options = prepared_options(temp.path());
        let config_path = temp.path().join("app.config.json");
        fs::write(&config_path, "{}").unwrap();
        let runner = MockRunner::new(0);

        execute(&config_path, &options, &runner).unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "bash");
        assert!(calls[0].1[0].ends_with("deploy.sh"));
    }

    #[test]
    fn dry_run_is_forwarded_to_the_script() {
        let temp = tempdir().unwrap();
        let options = GenerateOptions { dry_run: true, ..prepared_options(temp.path()) };
        let config_path = temp.path().join("app.config.json");
        fs::write(&config_path, "{}").unwrap();
        let runner = MockRunner::new(0);

        execute(&config_path, &options, &runner).unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls[0].1.last().map(String::as_str), Some("--dry-run"));
    }

    #[test]
    fn nonzero_exit_is_surfaced() {
        let temp = tempdir().unwrap();
        let options = prepared_options(temp.path());
        let config_path = temp.path().join("app.config.json");
        fs::write(&config_path, "{}").unwrap();
        let runner = MockRunner::new(7);

        let result = execute(&config_path, &options, &runner);

        assert!(matches!(result, Err(AppError::ScriptFailed(7))));
    }

    #[test]
    fn script_is_not_run_when_generation_fails() {
        let temp = tempdir().unwrap();
        let options = prepared_options(temp.path());
        fs::remove_file(options.template_dir.join("deploy.sh.template")).unwrap();
        let config_path = temp.path().join("app.config.json");
        fs::write(&config_path, "{}").unwrap();
        let runner = MockRunner::new(0);

        let result = execute(&config_path, &options, &runner);

        assert!(matches!(result, Err(AppError::GenerationFailed)));
        assert!(runner.calls.borrow().is_empty());
    }
}
