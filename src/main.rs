//! send-batches: upload a participant dataset in batches

use clap::Parser;
use participant_upload::UploadRunner;
use participant_upload::cli::SendArgs;
use participant_upload::utils::logging::init_logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = SendArgs::parse();
    init_logging(args.log_format);

    let result = async {
        let config = args.into_config().await?;
        UploadRunner::from_config(config)?.run_from_input().await
    }
    .await;

    // Failed batches are reported in the summary, not through the exit code
    match result {
        Ok(summary) => {
            println!("\n{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
