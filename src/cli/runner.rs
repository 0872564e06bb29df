use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use iconkit::{ResizeParams, SliceParams, resize_source_to_dir, slice_sheet_to_dir};

use super::args::{CliArgs, Command, ResizeArgs, SliceArgs};
use super::errors::AppError;

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn require_input(path: &Path) -> Result<(), AppError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AppError::InputNotFound {
            path: path.to_path_buf(),
        })
    }
}

fn resize_params(args: &ResizeArgs) -> ResizeParams {
    ResizeParams {
        write_manifest: args.manifest,
        ..ResizeParams::default()
    }
}

fn run_slice(args: &SliceArgs) -> Result<(), AppError> {
    require_input(&args.input)?;

    let report = slice_sheet_to_dir(&args.input, &args.output_dir, &SliceParams::default())?;
    info!(
        "Processed: {}, Skipped: {}",
        report.written.len(),
        report.skipped.len()
    );
    Ok(())
}

fn run_resize(args: &ResizeArgs) -> Result<(), AppError> {
    require_input(&args.input)?;

    let report = resize_source_to_dir(&args.input, &args.output_dir, &resize_params(args))?;
    for path in &report.written {
        info!("  - {}", path.display());
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    match &args.command {
        Command::Slice(slice) => run_slice(slice),
        Command::Resize(resize) => run_resize(resize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_point_at_the_public_tree() {
        let args = CliArgs::try_parse_from(["iconkit", "slice"]).unwrap();
        let Command::Slice(slice) = args.command else {
            panic!("expected slice");
        };
        assert_eq!(slice.input, Path::new("public/icon-sheet.png"));
        assert_eq!(slice.output_dir, Path::new("public/icons"));

        let args = CliArgs::try_parse_from(["iconkit", "resize"]).unwrap();
        let Command::Resize(resize) = args.command else {
            panic!("expected resize");
        };
        assert_eq!(resize.input, Path::new("public/icon-source.jpg"));
        assert_eq!(resize.output_dir, Path::new("public"));
        assert_eq!(resize_params(&resize), ResizeParams::default());
    }

    #[test]
    fn manifest_flag_enables_sidecar() {
        let args = CliArgs::try_parse_from(["iconkit", "resize", "--manifest"]).unwrap();
        let Command::Resize(resize) = args.command else {
            panic!("expected resize");
        };
        let params = resize_params(&resize);
        assert!(params.write_manifest);
        assert_eq!(params.targets, ResizeParams::default().targets);
    }

    #[test]
    fn pipeline_knobs_are_not_flags() {
        for argv in [
            ["iconkit", "resize", "--filter", "nearest"],
            ["iconkit", "slice", "--label-fraction", "0.5"],
            ["iconkit", "slice", "--config", "preset.json"],
        ] {
            assert!(CliArgs::try_parse_from(argv).is_err(), "{:?}", argv);
        }
    }

    #[test]
    fn missing_input_is_reported() {
        let args = CliArgs::try_parse_from([
            "iconkit",
            "resize",
            "--input",
            "/definitely/not/here.jpg",
        ])
        .unwrap();
        assert!(matches!(run(args), Err(AppError::InputNotFound { .. })));

        let args = CliArgs::try_parse_from([
            "iconkit",
            "slice",
            "--input",
            "/definitely/not/here.png",
        ])
        .unwrap();
        assert!(matches!(run(args), Err(AppError::InputNotFound { .. })));
    }
}
