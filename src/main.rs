use jeeves::{cli, logging, Config, Error, OpenAIProvider, Prompt};
use std::env;
use std::io;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let prompt = match Prompt::from_args(env::args().skip(1)) {
        Ok(prompt) => prompt,
        Err(_) => {
            println!("{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };

    match ask(&prompt).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn ask(prompt: &Prompt) -> Result<(), Error> {
    let config = Config::from_env()?;
    logging::init(&config);

    let provider = OpenAIProvider::from_config(&config)?;
    cli::run(&provider, &config, prompt, &mut io::stdout()).await
}
