use super::{frame::FrameDecoder, Error};
use crate::RequestHandler;
use bytes::BytesMut;
use log::{debug, trace};
use std::{net::SocketAddr, sync::Arc};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

const INITIAL_BUFFER_CAPACITY: usize = 4 * 1024;

pub(crate) struct ClientConnection {
    stream: TcpStream,
    peer: SocketAddr,
    buffer: BytesMut,
    decoder: FrameDecoder,
    handler: Arc<RequestHandler>,
}

impl ClientConnection {
    pub fn new(
        stream: TcpStream,
        peer: SocketAddr,
        decoder: FrameDecoder,
        handler: Arc<RequestHandler>,
    ) -> Self {
        ClientConnection {
            stream,
            peer,
            buffer: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            decoder,
            handler,
        }
    }

    /// Answers frames in arrival order until the peer disconnects.
    pub async fn serve(mut self) -> Result<(), Error> {
        loop {
            while let Some(frame) = self.decoder.decode(&mut self.buffer)? {
                trace!("{}: frame={:?}", self.peer, &frame[..]);
                let response = self.handler.handle(&frame)?;
                self.stream.write_all(&response).await?;
            }

            let read = self.stream.read_buf(&mut self.buffer).await?;
            trace!("{}: read {} bytes", self.peer, read);

            if read == 0 {
                self.decoder.finish(&self.buffer)?;
                debug!("{}: connection closed by peer", self.peer);
                return Ok(());
            }
        }
    }
}
