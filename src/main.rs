#[tokio::main]
async fn main() -> std::io::Result<()> {
    events_portal::run().await
}
