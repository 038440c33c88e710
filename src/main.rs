#[actix_web::main]
async fn main() -> std::io::Result<()> {
    citizenship_docs_server::run().await
}
