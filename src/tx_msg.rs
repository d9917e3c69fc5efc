use prost::Message;

/// The surface every gate message presents to the transaction layer.
pub trait Msg: Clone {
    type ValidationError;
    type Raw: From<Self> + Message + Default;

    /// The routing key of the module handling this message.
    fn route(&self) -> String;

    /// Unique type identifier, used in wire envelopes.
    fn type_url(&self) -> String;

    /// Stateless checks that need no access to chain state. Full validation
    /// happens when the message's domain type is assembled from its raw form.
    fn validate_basic(&self) -> Result<(), Self::ValidationError> {
        Ok(())
    }

    fn get_sign_bytes(self) -> Vec<u8> {
        let raw: Self::Raw = self.into();
        let mut buf = Vec::new();
        // encoding into a freshly-allocated Vec cannot run out of capacity
        raw.encode(&mut buf).unwrap();
        buf
    }
}
