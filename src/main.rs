use anyhow::Context;
use auth_forms::{
    client::AuthClient,
    config::get_configuration,
    forms::{Forms, LOGIN_FORM, REGISTER_FORM},
    page::{FormPage, SubmitEvent, EMAIL, PASSWORD, USERNAME},
    telemetry::get_subscriber,
};
use clap::{Arg, ArgMatches, Command};
use tracing_subscriber::util::SubscriberInitExt;

fn field(id: &'static str, env: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(id).help(help).env(env)
}

fn cli() -> Command {
    Command::new("auth-forms")
        .about("Submits the shop's login and registration forms")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("Origin of the shop backend, overrides the configuration")
                .env("AUTH_FORMS_BASE_URL"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("login")
                .about("Submit the login form")
                .arg(field(USERNAME, "AUTH_FORMS_USERNAME", "Username"))
                .arg(field(PASSWORD, "AUTH_FORMS_PASSWORD", "Password")),
        )
        .subcommand(
            Command::new("register")
                .about("Submit the registration form")
                .arg(field(USERNAME, "AUTH_FORMS_USERNAME", "Username"))
                .arg(field(PASSWORD, "AUTH_FORMS_PASSWORD", "Password"))
                .arg(field(EMAIL, "AUTH_FORMS_EMAIL", "Email address")),
        )
}

/// Fills a page with whichever fields were given on the command line.
fn page_from(matches: &ArgMatches, fields: &[&str]) -> FormPage {
    fields.iter().fold(FormPage::new(), |page, id| {
        match matches.get_one::<String>(id) {
            Some(value) => page.with_field(*id, value.as_str()),
            None => page,
        }
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    let config = get_configuration().context("Failed to read configuration.")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    let base_url = matches
        .get_one::<String>("base-url")
        .cloned()
        .unwrap_or(config.auth_server.base_url);

    let (form_id, page) = match matches.subcommand() {
        Some(("login", sub)) => (LOGIN_FORM, page_from(sub, &[USERNAME, PASSWORD])),
        Some(("register", sub)) => (REGISTER_FORM, page_from(sub, &[USERNAME, PASSWORD, EMAIL])),
        _ => anyhow::bail!("a form to submit is required"),
    };

    let client = AuthClient::new(base_url);
    let origin = client.base_url().to_owned();
    let forms = Forms::on_ready(client);
    let mut event = SubmitEvent::new(form_id);

    tracing::info!(form_id, %origin, "submitting form");
    let outcome = forms
        .submit(&mut event, &page)
        .await
        .context("No handler is bound to the form.")?;

    println!("{}", page.message());
    if let Some(location) = page.location() {
        println!("redirect: {}{}", origin, location);
    }

    outcome
        .map(|_| ())
        .with_context(|| format!("Submitting {} failed.", form_id))
}
