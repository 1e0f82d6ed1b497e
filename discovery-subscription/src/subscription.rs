//! `wso2.discovery.subscription.Subscription`.

use crate::PACKAGE;
use bytes::{Buf, BufMut};
use discovery_core::{DecodeError, Message, Name, TextFields, UnknownFields};
use prost::encoding::{DecodeContext, WireType, int32, int64, string};
use std::fmt;

const STRUCT_NAME: &str = "Subscription";

/// One API subscription of an application, as pushed to the gateway.
///
/// Fields are public; the `with_*` methods are shorthands for building a
/// value in one expression. Unset scalars hold their zero value and are not
/// written to the wire.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Subscription {
    /// Field 1.
    pub subscription_id: i32,
    /// Field 2, throttling policy name.
    pub policy_id: String,
    /// Field 3.
    pub api_id: i32,
    /// Field 4.
    pub app_id: i32,
    /// Field 5, e.g. `UNBLOCKED`.
    pub subscription_state: String,
    /// Field 6.
    pub time_stamp: i64,
    /// Field 7.
    pub tenant_id: i32,
    /// Field 8.
    pub tenant_domain: String,
    /// Field 9.
    pub subscription_uuid: String,
    /// Field 10.
    pub app_uuid: String,
    /// Field 11.
    pub api_uuid: String,
    /// Fields not known to this version of the schema, kept verbatim.
    pub unknown_fields: UnknownFields,
}

macro_rules! with_fields {
    ($($(#[$doc:meta])* $method:ident => $field:ident: $ty:ty),* $(,)?) => {
        impl Subscription {
            $(
                $(#[$doc])*
                #[must_use]
                pub fn $method(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = value.into();
                    self
                }
            )*
        }
    };
}

with_fields! {
    /// Sets `subscriptionId`.
    with_subscription_id => subscription_id: i32,
    /// Sets `policyId`.
    with_policy_id => policy_id: String,
    /// Sets `apiId`.
    with_api_id => api_id: i32,
    /// Sets `appId`.
    with_app_id => app_id: i32,
    /// Sets `subscriptionState`.
    with_subscription_state => subscription_state: String,
    /// Sets `timeStamp`.
    with_time_stamp => time_stamp: i64,
    /// Sets `tenantId`.
    with_tenant_id => tenant_id: i32,
    /// Sets `tenantDomain`.
    with_tenant_domain => tenant_domain: String,
    /// Sets `subscriptionUUID`.
    with_subscription_uuid => subscription_uuid: String,
    /// Sets `appUUID`.
    with_app_uuid => app_uuid: String,
    /// Sets `apiUUID`.
    with_api_uuid => api_uuid: String,
}

impl Subscription {
    /// Creates an empty subscription.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn int32s(&self) -> [(u32, i32); 4] {
        [
            (1, self.subscription_id),
            (3, self.api_id),
            (4, self.app_id),
            (7, self.tenant_id),
        ]
    }

    fn strings(&self) -> [(u32, &'static str, &String); 6] {
        [
            (2, "policyId", &self.policy_id),
            (5, "subscriptionState", &self.subscription_state),
            (8, "tenantDomain", &self.tenant_domain),
            (9, "subscriptionUUID", &self.subscription_uuid),
            (10, "appUUID", &self.app_uuid),
            (11, "apiUUID", &self.api_uuid),
        ]
    }
}

impl Message for Subscription {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        put_int32(1, self.subscription_id, buf);
        put_string(2, &self.policy_id, buf);
        put_int32(3, self.api_id, buf);
        put_int32(4, self.app_id, buf);
        put_string(5, &self.subscription_state, buf);
        if self.time_stamp != 0 {
            int64::encode(6, &self.time_stamp, buf);
        }
        put_int32(7, self.tenant_id, buf);
        put_string(8, &self.tenant_domain, buf);
        put_string(9, &self.subscription_uuid, buf);
        put_string(10, &self.app_uuid, buf);
        put_string(11, &self.api_uuid, buf);
        self.unknown_fields.encode(buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => int32::merge(wire_type, &mut self.subscription_id, buf, ctx)
                .map_err(field("subscription_id")),
            2 => string::merge(wire_type, &mut self.policy_id, buf, ctx)
                .map_err(field("policy_id")),
            3 => int32::merge(wire_type, &mut self.api_id, buf, ctx).map_err(field("api_id")),
            4 => int32::merge(wire_type, &mut self.app_id, buf, ctx).map_err(field("app_id")),
            5 => string::merge(wire_type, &mut self.subscription_state, buf, ctx)
                .map_err(field("subscription_state")),
            6 => int64::merge(wire_type, &mut self.time_stamp, buf, ctx)
                .map_err(field("time_stamp")),
            7 => int32::merge(wire_type, &mut self.tenant_id, buf, ctx)
                .map_err(field("tenant_id")),
            8 => string::merge(wire_type, &mut self.tenant_domain, buf, ctx)
                .map_err(field("tenant_domain")),
            9 => string::merge(wire_type, &mut self.subscription_uuid, buf, ctx)
                .map_err(field("subscription_uuid")),
            10 => string::merge(wire_type, &mut self.app_uuid, buf, ctx)
                .map_err(field("app_uuid")),
            11 => string::merge(wire_type, &mut self.api_uuid, buf, ctx)
                .map_err(field("api_uuid")),
            _ => self.unknown_fields.merge_field(tag, wire_type, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let ints = self
            .int32s()
            .iter()
            .filter(|(_, v)| *v != 0)
            .map(|(number, v)| int32::encoded_len(*number, v))
            .sum::<usize>();
        let strings = self
            .strings()
            .iter()
            .filter(|(_, _, v)| !v.is_empty())
            .map(|(number, _, v)| string::encoded_len(*number, v))
            .sum::<usize>();
        let time_stamp = if self.time_stamp == 0 {
            0
        } else {
            int64::encoded_len(6, &self.time_stamp)
        };
        ints + strings + time_stamp + self.unknown_fields.encoded_len()
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Name for Subscription {
    const NAME: &'static str = STRUCT_NAME;
    const PACKAGE: &'static str = PACKAGE;
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = TextFields::new();
        scalar(&mut text, "subscriptionId", self.subscription_id);
        string_field(&mut text, "policyId", &self.policy_id);
        scalar(&mut text, "apiId", self.api_id);
        scalar(&mut text, "appId", self.app_id);
        string_field(&mut text, "subscriptionState", &self.subscription_state);
        if self.time_stamp != 0 {
            text.scalar("timeStamp", self.time_stamp);
        }
        scalar(&mut text, "tenantId", self.tenant_id);
        for (_, name, value) in &self.strings()[2..] {
            string_field(&mut text, name, value);
        }
        text.unknown(&self.unknown_fields);
        write!(f, "{text}")
    }
}

fn scalar(text: &mut TextFields, name: &str, value: i32) {
    if value != 0 {
        text.scalar(name, value);
    }
}

fn string_field(text: &mut TextFields, name: &str, value: &str) {
    if !value.is_empty() {
        text.string(name, value);
    }
}

fn put_int32(tag: u32, value: i32, buf: &mut impl BufMut) {
    if value != 0 {
        int32::encode(tag, &value, buf);
    }
}

#[allow(clippy::ptr_arg)]
fn put_string(tag: u32, value: &String, buf: &mut impl BufMut) {
    if !value.is_empty() {
        string::encode(tag, value, buf);
    }
}

/// Tags a decode error with the field it came from.
fn field(name: &'static str) -> impl FnOnce(DecodeError) -> DecodeError {
    move |mut error| {
        error.push(STRUCT_NAME, name);
        error
    }
}
