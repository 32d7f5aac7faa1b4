use std::sync::Arc;

use crate::domain::{
    failure::{FailureCounters, FailureKind},
    recipient::Recipient,
};

use super::{MessageTransport, OutboundMessage};

/// Fire and forget: every send is attempted once and failures never reach the caller.
#[derive(Clone)]
pub struct MessageDispatcher {
    transport: Arc<dyn MessageTransport>,
    failures: Arc<FailureCounters>,
}

impl MessageDispatcher {
    pub fn new(transport: Arc<dyn MessageTransport>, failures: Arc<FailureCounters>) -> Self {
        MessageDispatcher {
            transport,
            failures,
        }
    }

    pub async fn send_text(&self, recipient: &Recipient, body: &str) {
        log::info!("Sending message to {}: {:?}", recipient, body);

        self.deliver(OutboundMessage {
            to: recipient.clone(),
            body: body.to_string(),
            media_url: None,
        })
        .await
    }

    pub async fn send_media(&self, recipient: &Recipient, media_url: &str, caption: &str) {
        log::info!("Sending image to {}, url: {}", recipient, media_url);

        self.deliver(OutboundMessage {
            to: recipient.clone(),
            body: caption.to_string(),
            media_url: Some(media_url.to_string()),
        })
        .await
    }

    async fn deliver(&self, message: OutboundMessage) {
        if let Err(e) = self.transport.send(&message).await {
            self.failures.record(FailureKind::DispatchFailure);
            log::error!(
                "[{}] Failed to send message to {}: {}",
                FailureKind::DispatchFailure,
                message.to,
                e
            );
        }
    }
}
