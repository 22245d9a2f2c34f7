//! the dashtheme binary
use dashtheme::{app::DashApp, error::Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let app = DashApp::init().await?;
    app.run().await
}
