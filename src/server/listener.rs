use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::vhost::responder::Responder;

/// Accepts connections and serves them one at a time.
///
/// Handling is strictly sequential: each connection is driven to
/// completion before the next accept. There are no timeouts at any layer,
/// so a slow or silent client occupies the server.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.server.listen_addr()).await?;
    info!("Serving HTTP on {}", cfg.server.listen_addr());
    info!("Virtual host: {}", cfg.vhost.root.display());

    let responder = Responder::from_config(cfg);
    let policy = cfg.query_policy();

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, responder.clone(), policy);
        if let Err(e) = conn.run().await {
            tracing::error!("Connection error from {}: {}", peer, e);
        }
    }
}
