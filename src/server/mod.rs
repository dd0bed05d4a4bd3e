mod config;
mod connection;
mod error;
mod frame;

pub use config::{
    ServerConfig, ServerConfigBuilder, DEFAULT_HOST, DEFAULT_MAX_FRAME_SIZE, DEFAULT_PORT,
};
pub use error::Error;

use crate::RequestHandler;
use connection::ClientConnection;
use frame::FrameDecoder;
use log::{debug, error, info, warn};
use rsbroker_proto::ApiRegistry;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

/// Accepts client connections and serves each one on its own task.
pub struct Broker {
    listener: TcpListener,
    decoder: FrameDecoder,
    handler: Arc<RequestHandler>,
}

impl Broker {
    pub async fn bind(config: ServerConfig) -> Result<Self, Error> {
        let handler = RequestHandler::new(ApiRegistry::default(), config.size_field);
        Self::with_handler(config, handler).await
    }

    pub async fn with_handler(config: ServerConfig, handler: RequestHandler) -> Result<Self, Error> {
        let listener = TcpListener::bind(config.listen_addr()).await?;
        debug!("bound {}", config.listen_addr());

        Ok(Broker {
            listener,
            decoder: FrameDecoder::new(config.max_frame_size),
            handler: Arc::new(handler),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn run(self) -> Result<(), Error> {
        info!("accepting connections on {}", self.local_addr()?);

        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("accept failed: {}", e);
                    continue;
                }
            };
            debug!("{}: connection accepted", peer);

            let connection =
                ClientConnection::new(stream, peer, self.decoder, Arc::clone(&self.handler));
            tokio::spawn(async move {
                match connection.serve().await {
                    Ok(()) => (),
                    Err(Error::Framing(e)) => error!("{}: closing connection: {}", peer, e),
                    Err(e) => warn!("{}: connection failed: {}", peer, e),
                }
            });
        }
    }
}
