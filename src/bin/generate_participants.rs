//! generate-participants: write a seeded fake participant dataset

use clap::Parser;
use participant_upload::cli::GenerateArgs;
use participant_upload::core::generator::{generate_participants, write_participants};
use participant_upload::utils::logging::init_logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = GenerateArgs::parse();
    init_logging(args.log_format);

    let result = async {
        let config = args.into_config().await?;
        let participants = generate_participants(&config)?;
        write_participants(&config.outfile, &participants).await?;
        Ok::<_, participant_upload::UploadError>((participants.len(), config.outfile))
    }
    .await;

    match result {
        Ok((count, path)) => {
            println!("Wrote {} participants -> {}", count, path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
