use std::fmt::Display;
use std::str::FromStr;

pub fn prompt_text_handle_errors<T>(prompt: &str) -> eyre::Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    loop {
        let t = inquire::Text::new(prompt).prompt()?;

        match t.trim().parse() {
            Ok(t) => return Ok(t),
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        }
    }
}

/// Like [`prompt_text_handle_errors`] but the input is masked and never
/// echoed back in error messages.
pub fn prompt_secret_handle_errors<T>(prompt: &str) -> eyre::Result<T>
where
    T: FromStr,
{
    loop {
        let t = inquire::Password::new(prompt)
            .without_confirmation()
            .prompt()?;

        match t.trim().parse() {
            Ok(t) => return Ok(t),
            Err(_) => {
                println!("Error: invalid value, try again");
                continue;
            }
        }
    }
}
