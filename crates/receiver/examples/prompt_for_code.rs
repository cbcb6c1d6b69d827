use std::io::{self, Write};

use callback_receiver::{
    callback_core::{EchoCode, ReceiverConfig},
    CallbackServer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ReceiverConfig::default();
    let redirect_uri = config.redirect_uri();

    let server = CallbackServer::bind(config, EchoCode).await?;
    let mut serving = tokio::spawn(server.serve());

    println!(
        "Register this redirect URI with your OAuth app, then authorize in the browser:\n{}\n",
        redirect_uri
    );

    print!("Paste the `code` shown in the browser: ");
    io::stdout().flush()?;

    let reading = tokio::task::spawn_blocking(|| {
        let mut code = String::new();
        io::stdin().read_line(&mut code).map(|_| code)
    });

    // Stop waiting for input if the receiver dies first
    let code = tokio::select! {
        served = &mut serving => {
            served??;
            return Err("callback server stopped before a code was entered".into());
        }
        read = reading => read??,
    };
    let code = code.trim();

    if code.is_empty() {
        return Err("No authorization code entered".into());
    }

    println!("\nReceived authorization code ({} chars)", code.len());

    Ok(())
}
