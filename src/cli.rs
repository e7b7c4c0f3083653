use std::{env, path::PathBuf};

#[derive(Debug, Default, Clone)]
pub struct CliOptions {
    pub endpoint: Option<String>,
    pub output: Option<PathBuf>,
}

pub fn parse_cli_options() -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--endpoint" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--endpoint requires a URL".to_string())?;
                options.endpoint = Some(value);
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--output requires a path".to_string())?;
                options.output = Some(PathBuf::from(value));
            }
            "--help" => {
                println!("Usage: menucal [--endpoint URL] [--output PATH]");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(options)
}
