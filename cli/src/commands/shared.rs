use crate::client::HitConfig;
use crate::commands::validators;
use crate::config::UrlPolicy;
use crate::core::formatter::{Formatter, OutputFormat};
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UrlPolicyArg {
    /// The first document declaring a URL keeps it
    First,
    /// Each document declaring a URL replaces the previous one
    Last,
}

impl From<UrlPolicyArg> for UrlPolicy {
    fn from(arg: UrlPolicyArg) -> Self {
        match arg {
            UrlPolicyArg::First => UrlPolicy::FirstWins,
            UrlPolicyArg::Last => UrlPolicy::LastWins,
        }
    }
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        help = "Load one yaml file from the directory",
        value_parser = validators::validate_file_name
    )]
    pub file: Option<String>,

    #[arg(
        short = 'd',
        long = "directory",
        global = true,
        default_value = ".",
        help = "Directory to load the yaml files from"
    )]
    pub directory: String,

    #[arg(
        long = "url-policy",
        global = true,
        default_value = "first",
        value_enum,
        ignore_case = true,
        help = "Which document's url wins when several declare one"
    )]
    pub url_policy: UrlPolicyArg,
}

impl SourceArgs {
    pub fn to_config(&self) -> HitConfig {
        HitConfig {
            directory: self.directory.clone(),
            file: self.file.clone(),
            url_policy: self.url_policy.into(),
        }
    }
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        global = true,
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,

    #[arg(
        long = "oneline",
        visible_alias = "ol",
        global = true,
        help = "Print commands in one line"
    )]
    pub oneline: bool,
}

impl OutputArgs {
    pub fn formatter(&self) -> Formatter {
        crate::core::formatter::get_formatter(&self.output, self.oneline)
    }
}
