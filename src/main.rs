use levelctl::LevelCtlError;

#[tokio::main]
async fn main() -> Result<(), LevelCtlError> {
    levelctl::app::run().await
}
