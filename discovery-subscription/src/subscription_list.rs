//! `wso2.discovery.subscription.SubscriptionList`.

use crate::PACKAGE;
use crate::descriptor::SUBSCRIPTION_LIST_PROTO;
use crate::subscription::Subscription;
use bytes::{Buf, BufMut};
use discovery_core::{DecodeError, Message, Name, TextFields, UnknownFields};
use discovery_schema::{
    DescriptorError, DynamicMessage, MessageDescriptor, ReflectError, SchemaRegistry,
};
use prost::encoding::{DecodeContext, WireType, message};
use prost_reflect::ReflectMessage;
use std::fmt;

/// Wire number of the `list` field.
pub const LIST_FIELD_NUMBER: u32 = 2;

const STRUCT_NAME: &str = "SubscriptionList";

const FULL_NAME: &str = "wso2.discovery.subscription.SubscriptionList";

/// Index path of `SubscriptionList` inside its file: the first top-level message.
const INDEX_PATH: &[usize] = &[0];

/// Snapshot of all subscriptions, pushed from the control plane to gateways.
///
/// # Example
/// ```ignore
/// let mut list = SubscriptionList::new();
/// list.push(Subscription::new().with_subscription_id(1));
///
/// let bytes = list.encode_to_vec();
/// assert_eq!(SubscriptionList::decode(bytes.as_slice())?, list);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionList {
    list: Vec<Subscription>,
    unknown_fields: UnknownFields,
}

impl SubscriptionList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the subscriptions in wire order; empty when unset.
    #[must_use]
    pub fn list(&self) -> &[Subscription] {
        &self.list
    }

    /// Returns the subscriptions for in-place editing.
    pub fn list_mut(&mut self) -> &mut Vec<Subscription> {
        &mut self.list
    }

    /// Appends a subscription.
    pub fn push(&mut self, subscription: Subscription) {
        self.list.push(subscription);
    }

    /// Replaces all subscriptions.
    pub fn set_list(&mut self, list: Vec<Subscription>) {
        self.list = list;
    }

    /// Removes and returns all subscriptions.
    pub fn take_list(&mut self) -> Vec<Subscription> {
        std::mem::take(&mut self.list)
    }

    /// Returns the number of subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if there are no subscriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the preserved unknown fields.
    #[must_use]
    pub fn unknown_fields(&self) -> &UnknownFields {
        &self.unknown_fields
    }

    /// Restores the zero value, dropping preserved unknown fields too.
    pub fn reset(&mut self) {
        Message::clear(self);
    }

    /// Returns the gzip-compressed descriptor of the declaring file and the
    /// index path of this message inside it.
    ///
    /// The compressed bytes are produced once per process.
    ///
    /// # Errors
    /// Returns an error if compression fails.
    #[deprecated(note = "use `SubscriptionList::message_descriptor` with a `SchemaRegistry`")]
    pub fn descriptor() -> Result<(&'static [u8], &'static [usize]), DescriptorError> {
        Ok((SUBSCRIPTION_LIST_PROTO.gzip_bytes()?, INDEX_PATH))
    }

    /// Resolves the descriptor of this message in `registry`.
    ///
    /// Returns `None` until the subscription files are registered.
    #[must_use]
    pub fn message_descriptor(registry: &SchemaRegistry) -> Option<MessageDescriptor> {
        registry.find_message(FULL_NAME)
    }

    /// Converts into the reflective form through `registry`.
    ///
    /// # Errors
    /// Returns an error if the types are not registered.
    pub fn to_dynamic(&self, registry: &SchemaRegistry) -> Result<DynamicMessage, ReflectError> {
        registry.decode(FULL_NAME, &self.encode_to_vec())
    }

    /// Converts from the reflective form.
    ///
    /// # Errors
    /// Returns an error if `message` is of another type.
    pub fn from_dynamic(message: &DynamicMessage) -> Result<Self, ReflectError> {
        let descriptor = message.descriptor();
        if descriptor.full_name() != FULL_NAME {
            return Err(ReflectError::TypeMismatch {
                expected: FULL_NAME.to_string(),
                actual: descriptor.full_name().to_string(),
            });
        }
        Ok(message.transcode_to::<Self>()?)
    }
}

impl Message for SubscriptionList {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        for subscription in &self.list {
            message::encode(LIST_FIELD_NUMBER, subscription, buf);
        }
        self.unknown_fields.encode(buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        if tag == LIST_FIELD_NUMBER {
            message::merge_repeated(wire_type, &mut self.list, buf, ctx).map_err(|mut error| {
                error.push(STRUCT_NAME, "list");
                error
            })
        } else {
            self.unknown_fields.merge_field(tag, wire_type, buf, ctx)
        }
    }

    fn encoded_len(&self) -> usize {
        message::encoded_len_repeated(LIST_FIELD_NUMBER, &self.list)
            + self.unknown_fields.encoded_len()
    }

    fn clear(&mut self) {
        self.list.clear();
        self.unknown_fields.clear();
    }
}

impl Name for SubscriptionList {
    const NAME: &'static str = STRUCT_NAME;
    const PACKAGE: &'static str = PACKAGE;
}

impl From<Vec<Subscription>> for SubscriptionList {
    fn from(list: Vec<Subscription>) -> Self {
        Self {
            list,
            unknown_fields: UnknownFields::new(),
        }
    }
}

impl FromIterator<Subscription> for SubscriptionList {
    fn from_iter<I: IntoIterator<Item = Subscription>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<Subscription> for SubscriptionList {
    fn extend<I: IntoIterator<Item = Subscription>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<'a> IntoIterator for &'a SubscriptionList {
    type Item = &'a Subscription;
    type IntoIter = std::slice::Iter<'a, Subscription>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl fmt::Display for SubscriptionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = TextFields::new();
        for subscription in &self.list {
            text.message("list", subscription);
        }
        text.unknown(&self.unknown_fields);
        write!(f, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{SUBSCRIPTION_LIST_FILE, register_all};
    use bytes::BytesMut;
    use discovery_core::MessageExt;
    use discovery_schema::embedded::gunzip;
    use discovery_schema::{DynamicText, Value};
    use prost_reflect::Kind;

    /// Reference encoding produced by `prost-derive` for the same schema.
    #[derive(Clone, PartialEq, prost::Message)]
    struct DerivedSubscription {
        #[prost(int32, tag = "1")]
        subscription_id: i32,
        #[prost(string, tag = "2")]
        policy_id: String,
        #[prost(int32, tag = "3")]
        api_id: i32,
        #[prost(int32, tag = "4")]
        app_id: i32,
        #[prost(string, tag = "5")]
        subscription_state: String,
        #[prost(int64, tag = "6")]
        time_stamp: i64,
        #[prost(int32, tag = "7")]
        tenant_id: i32,
        #[prost(string, tag = "8")]
        tenant_domain: String,
        #[prost(string, tag = "9")]
        subscription_uuid: String,
        #[prost(string, tag = "10")]
        app_uuid: String,
        #[prost(string, tag = "11")]
        api_uuid: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    struct DerivedList {
        #[prost(message, repeated, tag = "2")]
        list: Vec<DerivedSubscription>,
    }

    fn subscription(id: i32, policy: &str) -> Subscription {
        Subscription::new()
            .with_subscription_id(id)
            .with_policy_id(policy)
            .with_subscription_state("UNBLOCKED")
            .with_tenant_domain("carbon.super")
    }

    fn registry() -> SchemaRegistry {
        let registry = SchemaRegistry::new();
        register_all(&registry).unwrap();
        registry
    }

    #[test]
    fn test_empty_list() {
        let list = SubscriptionList::new();
        assert!(list.encode_to_vec().is_empty());
        assert_eq!(list.encoded_len(), 0);

        let decoded = SubscriptionList::decode(&[][..]).unwrap();
        assert!(decoded.list().is_empty());
        assert_eq!(decoded, list);
    }

    #[test]
    fn test_one_element_starts_with_list_tag() {
        let list = SubscriptionList::from(vec![subscription(1, "Gold")]);
        let bytes = list.encode_to_vec();
        assert_eq!(bytes[0], 0x12);
        assert_eq!(bytes[1] as usize, bytes.len() - 2);
    }

    #[test]
    fn test_order_preserved() {
        let list: SubscriptionList = [subscription(1, "Gold"), subscription(2, "Bronze")]
            .into_iter()
            .collect();
        let decoded = SubscriptionList::decode(list.encode_to_vec().as_slice()).unwrap();
        let ids: Vec<_> = decoded.list().iter().map(|s| s.subscription_id).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(decoded, list);
    }

    #[test]
    fn test_matches_derived_encoding() {
        let full = subscription(1, "Gold")
            .with_api_id(12)
            .with_app_id(7)
            .with_time_stamp(1_650_000_000_000i64)
            .with_tenant_id(-1234)
            .with_subscription_uuid("s-1")
            .with_app_uuid("app-1")
            .with_api_uuid("api-1");
        let list = SubscriptionList::from(vec![full, subscription(2, "Bronze")]);
        let derived = DerivedList {
            list: list
                .list()
                .iter()
                .map(|s| DerivedSubscription {
                    subscription_id: s.subscription_id,
                    policy_id: s.policy_id.clone(),
                    api_id: s.api_id,
                    app_id: s.app_id,
                    subscription_state: s.subscription_state.clone(),
                    time_stamp: s.time_stamp,
                    tenant_id: s.tenant_id,
                    tenant_domain: s.tenant_domain.clone(),
                    subscription_uuid: s.subscription_uuid.clone(),
                    app_uuid: s.app_uuid.clone(),
                    api_uuid: s.api_uuid.clone(),
                })
                .collect(),
        };

        let bytes = list.encode_to_vec();
        assert_eq!(bytes, derived.encode_to_vec());
        assert_eq!(list.encoded_len(), derived.encoded_len());
        assert_eq!(DerivedList::decode(bytes.as_slice()).unwrap(), derived);
    }

    #[test]
    fn test_encode_variants_agree() {
        let list = SubscriptionList::from(vec![subscription(1, "Gold"), subscription(2, "Gold")]);
        let vec = list.encode_to_vec();

        let mut buf = BytesMut::new();
        list.encode(&mut buf).unwrap();
        assert_eq!(&buf[..], &vec[..]);

        let mut slice = vec![0u8; vec.len()];
        assert_eq!(list.encode_to_slice(&mut slice).unwrap(), vec.len());
        assert_eq!(slice, vec);
    }

    #[test]
    fn test_encode_to_slice_too_small() {
        let list = SubscriptionList::from(vec![subscription(1, "Gold")]);
        let len = list.encoded_len();
        let mut slice = vec![0u8; len - 1];
        let err = list.encode_to_slice(&mut slice).unwrap_err();
        assert_eq!(err.required_capacity(), len);
        assert_eq!(err.remaining(), len - 1);
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let mut bytes = SubscriptionList::from(vec![subscription(5, "Gold")]).encode_to_vec();
        bytes.extend_from_slice(&[0x48, 0x2A, 0x52, 0x01, b'x']);

        let list = SubscriptionList::decode(bytes.as_slice()).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.unknown_fields().as_bytes(), &[0x48, 0x2A, 0x52, 0x01, b'x']);
        assert_eq!(list.encode_to_vec(), bytes);
    }

    #[test]
    fn test_merge_appends() {
        let first = SubscriptionList::from(vec![subscription(1, "Gold")]);
        let second = SubscriptionList::from(vec![subscription(2, "Gold")]);

        let mut merged = SubscriptionList::decode(first.encode_to_vec().as_slice()).unwrap();
        merged.merge(second.encode_to_vec().as_slice()).unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.list()[1].subscription_id, 2);
    }

    #[test]
    fn test_reset() {
        let mut list =
            SubscriptionList::decode(&[0x12, 0x02, 0x08, 0x01, 0x48, 0x2A][..]).unwrap();
        assert!(!list.unknown_fields().is_empty());
        list.reset();
        assert_eq!(list, SubscriptionList::default());
    }

    #[test]
    fn test_mutators() {
        let mut list = SubscriptionList::new();
        list.push(subscription(1, "Gold"));
        list.extend([subscription(2, "Gold")]);
        list.list_mut()[0].policy_id = "Silver".to_string();
        assert_eq!(list.list()[0].policy_id, "Silver");

        let taken = list.take_list();
        assert_eq!(taken.len(), 2);
        assert!(list.is_empty());

        list.set_list(taken);
        assert_eq!((&list).into_iter().count(), 2);
    }

    #[test]
    fn test_list_wire_type_mismatch() {
        let err = SubscriptionList::decode(&[0x10, 0x01][..]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("SubscriptionList.list"));
        assert!(msg.contains("invalid wire type"));
    }

    #[test]
    fn test_truncated_element() {
        assert!(SubscriptionList::decode(&[0x12, 0x05, 0x08][..]).is_err());
    }

    #[test]
    fn test_element_error_names_both_levels() {
        // list { policyId: <invalid UTF-8> }
        let err = SubscriptionList::decode(&[0x12, 0x03, 0x12, 0x01, 0xFF][..]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("SubscriptionList.list"));
        assert!(msg.contains("Subscription.policy_id"));
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_descriptor() {
        let (gz, path) = SubscriptionList::descriptor().unwrap();
        assert_eq!(path, [0]);
        assert_eq!(
            gunzip(SUBSCRIPTION_LIST_FILE, gz).unwrap(),
            SUBSCRIPTION_LIST_PROTO.raw_bytes().unwrap()
        );

        let (again, _) = SubscriptionList::descriptor().unwrap();
        assert_eq!(gz.as_ptr(), again.as_ptr());
    }

    #[test]
    fn test_message_descriptor() {
        assert!(SubscriptionList::message_descriptor(&SchemaRegistry::new()).is_none());

        let descriptor = SubscriptionList::message_descriptor(&registry()).unwrap();
        assert_eq!(descriptor.full_name(), SubscriptionList::full_name());
        let list = descriptor.get_field_by_name("list").unwrap();
        assert_eq!(list.number(), LIST_FIELD_NUMBER);
        assert!(list.is_list());
        assert!(matches!(
            list.kind(),
            Kind::Message(element) if element.full_name() == Subscription::full_name()
        ));
    }

    #[test]
    fn test_direct_and_dynamic_agree() {
        let registry = registry();
        let mut list = SubscriptionList::from(vec![
            subscription(1, "Gold").with_time_stamp(1_650_000_000_000i64),
            subscription(2, "Bronze").with_tenant_id(-1234),
        ]);
        list.merge(&[0x48, 0x2A][..]).unwrap();

        let dynamic = list.to_dynamic(&registry).unwrap();
        assert_eq!(dynamic.encode_to_vec(), list.encode_to_vec());
        assert_eq!(DynamicText(&dynamic).to_string(), list.to_string());
        let elements = dynamic.get_field_by_name("list").unwrap();
        assert_eq!(elements.as_list().unwrap().len(), 2);

        assert_eq!(SubscriptionList::from_dynamic(&dynamic).unwrap(), list);
    }

    #[test]
    fn test_dynamic_built_by_hand() {
        let registry = registry();
        let subscription_type = registry
            .find_message("wso2.discovery.subscription.Subscription")
            .unwrap();
        let mut element = DynamicMessage::new(subscription_type);
        element.set_field_by_name("subscriptionId", Value::I32(7));
        element.set_field_by_name("policyId", Value::String("Gold".to_string()));

        let mut dynamic =
            DynamicMessage::new(SubscriptionList::message_descriptor(&registry).unwrap());
        dynamic.set_field_by_name("list", Value::List(vec![Value::Message(element)]));

        let direct = SubscriptionList::decode(dynamic.encode_to_vec().as_slice()).unwrap();
        assert_eq!(
            direct.list(),
            [Subscription::new().with_subscription_id(7).with_policy_id("Gold")]
        );
    }

    #[test]
    fn test_from_dynamic_wrong_type() {
        let registry = registry();
        let other = DynamicMessage::new(
            registry
                .find_message("wso2.discovery.subscription.Subscription")
                .unwrap(),
        );
        assert!(matches!(
            SubscriptionList::from_dynamic(&other),
            Err(ReflectError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_to_dynamic_unregistered() {
        let list = SubscriptionList::from(vec![subscription(1, "Gold")]);
        assert!(matches!(
            list.to_dynamic(&SchemaRegistry::new()),
            Err(ReflectError::UnknownMessage { .. })
        ));
    }

    #[test]
    fn test_display() {
        let mut list = SubscriptionList::from(vec![
            Subscription::new().with_subscription_id(1).with_policy_id("Gold"),
            Subscription::new().with_subscription_id(2),
        ]);
        list.merge(&[0x48, 0x2A][..]).unwrap();
        assert_eq!(
            list.to_string(),
            r#"list:{subscriptionId:1 policyId:"Gold"} list:{subscriptionId:2} 9:42"#
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(
            SubscriptionList::full_name(),
            "wso2.discovery.subscription.SubscriptionList"
        );
    }
}
