use crate::types::patient::PatientForm;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cadrisk",
    version,
    about = "Heuristic coronary artery disease risk assessment CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single patient from flags and/or a JSON file
    Assess(AssessCommand),
    /// Score every patient in a JSON array
    Batch(BatchCommand),
    /// Print the active scoring rule
    Rules(RulesCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}

/// Every field is taken as raw text so an absent flag reaches the validator
/// as missing rather than being rejected by clap.
#[derive(Args, Default)]
pub struct FormArgs {
    #[arg(long)]
    pub patient_id: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub height_cm: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub weight_kg: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub systolic_bp: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub diastolic_bp: Option<String>,
    #[arg(long = "cholesterol", allow_negative_numbers = true)]
    pub cholesterol_mgdl: Option<String>,
    #[arg(long = "glucose", allow_negative_numbers = true)]
    pub glucose_mgdl: Option<String>,
    #[arg(long)]
    pub smoking: Option<String>,
    #[arg(long)]
    pub alcohol_intake: Option<String>,
    #[arg(long)]
    pub physically_active: Option<String>,
    #[arg(long = "activity-level", allow_negative_numbers = true)]
    pub physical_activity_level: Option<String>,
}

impl From<FormArgs> for PatientForm {
    fn from(args: FormArgs) -> Self {
        PatientForm {
            patient_id: args.patient_id,
            age: args.age,
            gender: args.gender,
            height_cm: args.height_cm,
            weight_kg: args.weight_kg,
            systolic_bp: args.systolic_bp,
            diastolic_bp: args.diastolic_bp,
            cholesterol_mgdl: args.cholesterol_mgdl,
            glucose_mgdl: args.glucose_mgdl,
            smoking: args.smoking,
            alcohol_intake: args.alcohol_intake,
            physically_active: args.physically_active,
            physical_activity_level: args.physical_activity_level,
        }
    }
}

#[derive(Args)]
pub struct AssessCommand {
    /// JSON object with the form fields; `-` reads stdin. Flags override it.
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[command(flatten)]
    pub form: FormArgs,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BatchCommand {
    /// JSON array of form objects; `-` reads stdin
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct RulesCommand {
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn assess_flags_map_onto_form_fields() {
        let cli = Cli::parse_from([
            "cadrisk",
            "assess",
            "--age",
            "61",
            "--cholesterol",
            "230",
            "--activity-level",
            "3",
        ]);
        let Commands::Assess(cmd) = cli.command else {
            panic!("expected assess command");
        };
        let form = PatientForm::from(cmd.form);
        assert_eq!(form.age.as_deref(), Some("61"));
        assert_eq!(form.cholesterol_mgdl.as_deref(), Some("230"));
        assert_eq!(form.physical_activity_level.as_deref(), Some("3"));
        assert!(form.gender.is_none());
    }

    #[test]
    fn negative_numbers_reach_the_validator() {
        let cli = Cli::parse_from(["cadrisk", "assess", "--age", "-4"]);
        let Commands::Assess(cmd) = cli.command else {
            panic!("expected assess command");
        };
        assert_eq!(cmd.form.age.as_deref(), Some("-4"));

        let cli = Cli::parse_from(["cadrisk", "assess", "--weight-kg", "-2.5"]);
        let Commands::Assess(cmd) = cli.command else {
            panic!("expected assess command");
        };
        assert_eq!(cmd.form.weight_kg.as_deref(), Some("-2.5"));
    }

    #[test]
    fn flag_is_not_swallowed_as_a_value() {
        let result = Cli::try_parse_from(["cadrisk", "assess", "--age", "--gender", "male"]);
        let err = result.err().expect("missing age value should be a usage error");
        assert_ne!(err.kind(), clap::error::ErrorKind::UnknownArgument);
        assert!(err.to_string().contains("--age"));
    }
}
