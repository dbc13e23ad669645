use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use phpgen_core::{File, Overwrite, WriteResult};
use phpgen_model::PhpFile;
use phpgen_printer::{Indent, Printer, PrinterConfig};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct RenderCommand {
    /// Model document (TOML, or JSON with a .json extension)
    pub model: PathBuf,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Printer settings file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Indentation: `tab` or a number of spaces from 1 to 8
    #[arg(long)]
    pub indent: Option<Indent>,

    /// Blank lines between methods
    #[arg(long)]
    pub lines_between_methods: Option<usize>,

    /// Fail if the output file is not up to date, without writing it
    #[arg(long, requires = "output", conflicts_with = "if_missing")]
    pub check: bool,

    /// Leave an existing output file untouched
    #[arg(long, requires = "output")]
    pub if_missing: bool,
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let model = PhpFile::open(&self.model).unwrap_or_exit();
        tracing::debug!(
            path = %self.model.display(),
            namespaces = model.namespaces.len(),
            "loaded model"
        );

        let code = self.render(&model)?;

        let Some(output) = &self.output else {
            print!("{}", code);
            return Ok(());
        };

        let file = File::new(output, code).overwrite(if self.if_missing {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        });

        if self.check {
            if file.is_up_to_date()? {
                println!("✓ {} is up to date", output.display());
                return Ok(());
            }
            eprintln!("✗ {} is out of date", output.display());
            std::process::exit(1);
        }

        let result = file
            .write()
            .wrap_err_with(|| format!("Failed to write {}", output.display()))?;
        match result {
            WriteResult::Written => println!("Rendered {}", output.display()),
            WriteResult::Skipped => println!("Skipped {} (already exists)", output.display()),
        }

        Ok(())
    }

    /// Settings file first, then command line flags on top.
    fn printer_config(&self) -> Result<PrinterConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
                toml::from_str::<PrinterConfig>(&text)
                    .wrap_err_with(|| format!("Invalid printer settings in {}", path.display()))?
            }
            None => PrinterConfig::default(),
        };

        if let Some(indent) = self.indent {
            config.indent = indent;
        }
        if let Some(lines) = self.lines_between_methods {
            config.lines_between_methods = lines;
        }
        Ok(config)
    }

    fn render(&self, model: &PhpFile) -> Result<String> {
        let printer = Printer::new(self.printer_config()?);
        printer
            .render_file(model)
            .wrap_err_with(|| format!("Failed to render {}", self.model.display()))
    }
}
