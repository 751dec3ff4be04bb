//! Artifact-generation pipeline.
//!
//! Runs the three generators in a fixed order, writes each rendered
//! artifact, and aggregates per-artifact outcomes. Generators are
//! independent: a missing template fails that artifact but siblings are
//! still attempted. Re-running with unchanged inputs produces byte-identical
//! artifacts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, DeployConfig, GenerateOptions};
use crate::services::generators::{self, Artifact};

/// Outcome of one artifact.
#[derive(Debug)]
pub struct ArtifactOutcome {
    pub label: &'static str,
    pub result: Result<PathBuf, AppError>,
}

/// Aggregate result of a pipeline run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<ArtifactOutcome>,
    /// Non-fatal conditions, e.g. a failed chmod on the deploy script.
    pub warnings: Vec<String>,
}

impl GenerationReport {
    /// Overall success is the logical AND of every artifact's outcome.
    pub fn success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

/// Generate and write all artifacts for an already-validated configuration.
///
/// The output directory is created recursively if missing; failure to do so
/// is fatal since no artifact could be written at all.
pub fn generate_artifacts(
    config: &DeployConfig,
    options: &GenerateOptions,
) -> Result<GenerationReport, AppError> {
    fs::create_dir_all(&options.output_dir)?;

    let mut report = GenerationReport::default();

    let pm = generators::process_manager::generate(config, &options.template_dir);
    write_outcome(&mut report, generators::process_manager::LABEL, pm, options);

    // The deploy script embeds the rendered reverse-proxy text, so it is
    // threaded through directly instead of being read back from disk.
    let proxy = generators::reverse_proxy::generate(config, &options.template_dir);
    let nginx_text = match &proxy {
        Ok(artifact) => artifact.content.clone(),
        Err(_) => String::new(),
    };
    write_outcome(&mut report, generators::reverse_proxy::LABEL, proxy, options);

    let script =
        generators::deploy_script::generate(config, &options.template_dir, options, &nginx_text);
    write_outcome(&mut report, generators::deploy_script::LABEL, script, options);

    Ok(report)
}

fn write_outcome(
    report: &mut GenerationReport,
    label: &'static str,
    result: Result<Artifact, AppError>,
    options: &GenerateOptions,
) {
    let artifact = match result {
        Ok(artifact) => artifact,
        Err(err) => {
            report.outcomes.push(ArtifactOutcome { label, result: Err(err) });
            return;
        }
    };

    let path = options.output_dir.join(artifact.file_name);
    if let Err(err) = fs::write(&path, &artifact.content) {
        report.outcomes.push(ArtifactOutcome { label, result: Err(err.into()) });
        return;
    }

    if artifact.executable
        && let Err(err) = mark_executable(&path)
    {
        // Content was written correctly; a failed chmod is only a warning.
        report.warnings.push(format!("Could not make script executable: {}", err));
    }

    report.outcomes.push(ArtifactOutcome { label, result: Ok(path) });
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::templates;
    use tempfile::tempdir;

    fn options_in(root: &Path) -> GenerateOptions {
        GenerateOptions {
            output_dir: root.join("generated"),
            template_dir: root.join("templates"),
            ..Default::default()
        }
    }

    #[test]
    fn writes_all_three_artifacts() {
        let temp = tempdir().unwrap();
        let options = options_in(temp.path());
        templates::materialize(&options.template_dir).unwrap();

        let report = generate_artifacts(&DeployConfig::default(), &options).unwrap();

        assert!(report.success());
        assert!(options.output_dir.join("ecosystem.config.js").exists());
        assert!(options.output_dir.join("nginx.config.generated").exists());
        assert!(options.output_dir.join("deploy.sh").exists());
    }

    #[cfg(unix)]
    #[test]
    fn deploy_script_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let options = options_in(temp.path());
        templates::materialize(&options.template_dir).unwrap();

        generate_artifacts(&DeployConfig::default(), &options).unwrap();

        let mode = fs::metadata(options.output_dir.join("deploy.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert!(mode & 0o111 != 0, "deploy.sh should be executable");
    }

    #[test]
    fn rerun_is_byte_identical() {
        let temp = tempdir().unwrap();
        let options = options_in(temp.path());
        templates::materialize(&options.template_dir).unwrap();

        generate_artifacts(&DeployConfig::default(), &options).unwrap();
        let first = fs::read(options.output_dir.join("deploy.sh")).unwrap();

        generate_artifacts(&DeployConfig::default(), &options).unwrap();
        let second = fs::read(options.output_dir.join("deploy.sh")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_template_fails_artifact_but_not_siblings() {
        let temp = tempdir().unwrap();
        let options = options_in(temp.path());
        templates::materialize(&options.template_dir).unwrap();
        fs::remove_file(options.template_dir.join("nginx.config.template")).unwrap();

        let report = generate_artifacts(&DeployConfig::default(), &options).unwrap();

        assert!(!report.success());
        let failed: Vec<_> =
            report.outcomes.iter().filter(|o| o.result.is_err()).map(|o| o.label).collect();
        assert_eq!(failed, vec!["Nginx configuration"]);

        // Siblings were still written.
        assert!(options.output_dir.join("ecosystem.config.js").exists());
        assert!(options.output_dir.join("deploy.sh").exists());
    }

    #[test]
    fn deploy_script_embeds_empty_config_when_proxy_failed() {
        let temp = tempdir().unwrap();
        let options = options_in(temp.path());
        templates::materialize(&options.template_dir).unwrap();
        fs::remove_file(options.template_dir.join("nginx.config.template")).unwrap();

        generate_artifacts(&DeployConfig::default(), &options).unwrap();

        let script = fs::read_to_string(options.output_dir.join("deploy.sh")).unwrap();
        assert!(!script.contains("{{NGINX_CONFIG}}"));
        assert!(!script.contains("server_name"));
    }

    #[test]
    fn embedded_proxy_text_is_shell_escaped() {
        let temp = tempdir().unwrap();
        let options = options_in(temp.path());
        templates::materialize(&options.template_dir).unwrap();

        generate_artifacts(&DeployConfig::default(), &options).unwrap();

        let script = fs::read_to_string(options.output_dir.join("deploy.sh")).unwrap();
        // The nginx template's `$host` must arrive escaped in the script.
        assert!(script.contains("proxy_set_header Host \\$host;"));
        assert!(!script.contains("proxy_set_header Host $host;"));
    }
}
