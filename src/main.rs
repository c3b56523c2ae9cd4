//! mkcproj's main application entry point and orchestration logic.
//! Handles command-line argument parsing, metadata collection and
//! coordinates the project assembly.

use log::info;

use mkcproj::{
    assembler::Assembler,
    cli::{get_args, Args},
    config::{load_config, CONFIG_FILE},
    error::{default_error_handler, Result},
    fs::LocalFilesystem,
    logger::{
        init_logger, trace_command_line, trace_environment, trace_program_info, trace_system_info,
    },
    prompt::{collect_metadata, DialoguerPrompter},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the configuration file
/// 2. Sets up the log file
/// 3. Collects the project metadata, prompting for what is missing
/// 4. Creates the project, or prints the plan on `--dry-run`
fn run(args: Args) -> Result<()> {
    let config = load_config(args.conf_filename.as_deref())?;

    let log_settings = args.log_settings(&config);
    init_logger(&log_settings)?;

    info!("main - begin");
    trace_command_line();
    trace_environment();
    trace_system_info();
    let config_file = args
        .conf_filename
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| CONFIG_FILE.to_string());
    trace_program_info(&log_settings, &config_file);

    let prompter = DialoguerPrompter::new();
    let metadata =
        collect_metadata(&prompter, args.known_metadata(&config), !args.has_metadata_flags())?;
    metadata.log_summary(args.verbose);

    let fs = LocalFilesystem::new();
    let mut assembler =
        Assembler::new(&fs, &metadata).force(args.force).verbose(args.verbose);

    if args.dry_run {
        for (kind, path) in assembler.plan_directories() {
            println!("{}: '{}'", kind, path.display());
        }
        for resolved in assembler.plan() {
            println!(
                "{}: '{}' -> '{}'",
                resolved.kind,
                resolved.template_path.display(),
                resolved.new_file_path.display()
            );
        }
        info!("main - end (dry run)");
        return Ok(());
    }

    let report = assembler.assemble()?;

    println!(
        "Project {} created successfully in {} ({} files).",
        metadata.project_name,
        metadata.project_dir().display(),
        report.files.len()
    );
    info!("main - end");
    Ok(())
}
