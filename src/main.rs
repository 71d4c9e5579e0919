use lined::{error, App, FsDocumentStore, Result};

fn main() -> Result<()> {
    error::setup_panic_handler();

    println!("lined - Interactive line-oriented document editor");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut app = App::new(stdin.lock(), stdout.lock(), FsDocumentStore);
    app.run()
}
