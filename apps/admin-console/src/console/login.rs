//! Login screen.

use vaahan_core::domain::Credentials;
use vaahan_shared::LoginForm;

use crate::console::prompt;
use crate::state::AppState;

/// Prompt for credentials until validation passes. Returns `false` when the
/// user quits or input ends before a successful sign-in.
pub async fn run(state: &AppState) -> anyhow::Result<bool> {
    println!("== Park Vaahan Admin ==");
    println!("Sign in to your dashboard ('quit' to exit)\n");

    loop {
        let Some(email) = prompt("Email address: ")? else {
            return Ok(false);
        };
        if email.eq_ignore_ascii_case("quit") {
            return Ok(false);
        }
        let Some(password) = prompt("Password: ")? else {
            return Ok(false);
        };

        let form = LoginForm { email, password };
        let errors = form.validate();
        if !errors.is_empty() {
            // Field-level messages only; the services are never touched here.
            if let Some(message) = &errors.email {
                println!("  {message}");
            }
            if let Some(message) = &errors.password {
                println!("  {message}");
            }
            println!();
            continue;
        }

        state
            .auth
            .login(Credentials {
                email: form.email,
                password: form.password,
            })
            .await?;
        println!("Signed in.\n");
        return Ok(true);
    }
}
