//! Interactive terminal session.

use rustyline::{DefaultEditor, error::ReadlineError};
use uniborrow_server::{
    domain::{CatalogView, MessageContent, SignUpForm, parse_category_filter},
    infrastructure::dto::http::SignUpRequestDto,
};

use crate::{
    api::ApiClient,
    command::{Command, HELP},
    concierge::ConciergeConnection,
    error::ClientError,
    render,
};

const PROMPT: &str = "uniborrow> ";

/// REPL state: the API client, the locally filtered catalog and the open
/// concierge panel.
struct Repl {
    api: ApiClient,
    editor: DefaultEditor,
    catalog: CatalogView,
    concierge: Option<ConciergeConnection>,
}

/// Run the interactive client against `server_url` until `quit` or EOF.
pub async fn run_client(server_url: &str) -> Result<(), ClientError> {
    let api = ApiClient::new(reqwest::Client::new(), server_url);

    // The full collection is fetched once and filtered locally
    let listings = api.listings().await?;
    println!(
        "Connected to {} ({} listings). Type 'help' for commands.",
        api.base_url(),
        listings.len()
    );

    let concierge = match ConciergeConnection::connect(server_url).await {
        Ok(connection) => Some(connection),
        Err(e) => {
            tracing::warn!("Concierge unavailable: {}", e);
            None
        }
    };

    let mut repl = Repl {
        api,
        editor: DefaultEditor::new()?,
        catalog: CatalogView::new(listings),
        concierge,
    };
    repl.print_transcript();

    let result = repl.run().await;
    if let Some(connection) = repl.concierge.take() {
        connection.close().await;
    }
    result
}

impl Repl {
    async fn run(&mut self) -> Result<(), ClientError> {
        loop {
            let line = match self.read_line(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };
            if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                tracing::debug!("History not recorded: {}", e);
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }

            // Errors from one command never end the session
            if let Err(e) = self.execute(command).await {
                println!("Error: {e}");
            }
        }
        println!("Bye!");
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        tokio::task::block_in_place(|| self.editor.readline(prompt))
    }

    async fn execute(&mut self, command: Command) -> Result<(), ClientError> {
        match command {
            Command::Search(text) => {
                self.catalog.set_search(text);
                self.print_catalog();
            }
            Command::Category(name) => match parse_category_filter(&name) {
                Ok(category) => {
                    self.catalog.set_category(category);
                    self.print_catalog();
                }
                Err(e) => println!("{e}"),
            },
            Command::List => self.print_catalog(),
            Command::Show(id) => {
                let listing = self.api.listing(&id).await?;
                println!("{}", render::listing_detail(&listing));
            }
            Command::Describe(item_name) => {
                println!("{}", self.api.describe(&item_name).await?);
            }
            Command::Zones => {
                for zone in self.api.safe_zones().await? {
                    println!("{}", render::safe_zone(&zone));
                }
            }
            Command::SignIn { email } => {
                let password = self.read_line("Password: ")?;
                match self.api.sign_in(&email, &password).await? {
                    Some(user) => println!("Signed in as {}", render::profile(&user)),
                    None => println!("Signed in."),
                }
            }
            Command::SignUp { email, name } => self.sign_up(email, name).await?,
            Command::SignOut => {
                self.api.sign_out().await?;
                println!("Signed out.");
            }
            Command::Me => {
                let user = self.api.me().await?;
                println!("{}", render::profile(&user));
            }
            Command::Ask(text) => self.ask(&text).await?,
            Command::Help => println!("{HELP}"),
            Command::Quit | Command::Nothing => {}
        }
        Ok(())
    }

    async fn sign_up(&mut self, email: String, name: String) -> Result<(), ClientError> {
        let form = SignUpForm {
            name,
            email,
            password: self.read_line("Password: ")?,
            confirm_password: self.read_line("Confirm password: ")?,
        };
        // Checked locally before anything is sent
        form.validate()?;

        let request = SignUpRequestDto {
            name: form.name,
            email: form.email,
            password: form.password,
            confirm_password: form.confirm_password,
        };
        match self.api.sign_up(request).await? {
            Some(user) => println!("Welcome, {}", render::profile(&user)),
            None => println!("Account created. Check your email to confirm it, then sign in."),
        }
        Ok(())
    }

    /// Input stays blocked until the reply (or fallback) arrives.
    async fn ask(&mut self, text: &str) -> Result<(), ClientError> {
        if let Err(e) = MessageContent::new(text.to_string()) {
            println!("{e}");
            return Ok(());
        }

        if self.concierge.is_none() {
            self.concierge = Some(ConciergeConnection::connect(self.api.base_url()).await?);
            self.print_transcript();
        }
        let Some(connection) = self.concierge.as_mut() else {
            return Err(ClientError::ConnectionClosed);
        };

        match connection.ask(text, || println!("Concierge is typing...")).await {
            Ok(reply) => {
                println!("{}", render::chat_message(&reply));
                Ok(())
            }
            Err(ClientError::Rejected(reason)) => {
                println!("{reason}");
                Ok(())
            }
            Err(e) => {
                // Reconnect on the next ask
                self.concierge = None;
                Err(e)
            }
        }
    }

    fn print_catalog(&mut self) {
        let total = self.catalog.listings().len();
        println!("{}", render::catalog(self.catalog.visible(), total));
    }

    fn print_transcript(&self) {
        if let Some(connection) = &self.concierge {
            for message in connection.transcript() {
                println!("{}", render::chat_message(message));
            }
        }
    }
}
