use serde::{Deserialize, Serialize};

use crate::ZoomAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadZoomRequest {
    pub action: ZoomAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    ZoomRequest(PayloadZoomRequest),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_contract_zoom_request() {
        let event = Event::ZoomRequest(PayloadZoomRequest {
            action: ZoomAction::In,
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"ZoomRequest":{"action":"In"}}"#);

        let event: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(
            event,
            Event::ZoomRequest(PayloadZoomRequest {
                action: ZoomAction::In
            })
        );
    }
}
