//! Enumerations that appear in checkout documents.

use serde::{Deserialize, Serialize};

use crate::wire::{WireEnum, wire_enum};

wire_enum! {
    /// Financial state of an order (`<financial-order-state>`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub enum FinancialOrderState {
        /// Payment is being reviewed; the order cannot be charged yet.
        #[default]
        Reviewing => "REVIEWING",
        /// Authorized and ready to charge.
        Chargeable => "CHARGEABLE",
        /// A charge is in progress.
        Charging => "CHARGING",
        /// Fully or partially charged.
        Charged => "CHARGED",
        /// The card was declined.
        PaymentDeclined => "PAYMENT_DECLINED",
        /// Cancelled by the merchant.
        Cancelled => "CANCELLED",
        /// Cancelled by the checkout service.
        CancelledByGoogle => "CANCELLED_BY_GOOGLE",
    }
}

wire_enum! {
    /// Fulfillment state of an order (`<fulfillment-order-state>`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub enum FulfillmentOrderState {
        /// Not yet processed by the merchant.
        #[default]
        New => "NEW",
        /// Being prepared for shipment.
        Processing => "PROCESSING",
        /// Shipped to the buyer.
        Delivered => "DELIVERED",
        /// Will not be shipped.
        WillNotDeliver => "WILL_NOT_DELIVER",
    }
}

wire_enum! {
    /// Shipping carrier named in `<tracking-data>`.
    ///
    /// `FedEx` and `Other` travel under their symbolic names.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub enum Carrier {
        /// DHL.
        Dhl => "DHL",
        /// FedEx.
        FedEx => "",
        /// UPS.
        Ups => "UPS",
        /// United States Postal Service.
        Usps => "USPS",
        /// Any other carrier.
        #[default]
        Other => "",
    }
}

wire_enum! {
    /// Kind of merchant code applied to an order; the wire name is the
    /// adjustment element that carries it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum MerchantCodeType {
        /// A coupon code.
        Coupon => "coupon-adjustment",
        /// A gift certificate code.
        GiftCertificate => "gift-certificate-adjustment",
    }
}

wire_enum! {
    /// Carrier-calculated shipping service.
    ///
    /// The declared wire name is the carrier's service name; `Unknown`
    /// declares none. Service names are only unique per carrier (FedEx and
    /// UPS both offer `Ground`), so look one up with
    /// [`ShippingType::from_service`] rather than `from_wire`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub enum ShippingType {
        /// No carrier service.
        #[default]
        Unknown => "",
        /// FedEx Priority Overnight.
        FedexPriorityOvernight => "Priority Overnight",
        /// FedEx Standard Overnight.
        FedexStandardOvernight => "Standard Overnight",
        /// FedEx 2Day.
        FedexTwoDay => "2Day",
        /// FedEx Express Saver.
        FedexExpressSaver => "Express Saver",
        /// FedEx Ground.
        FedexGround => "Ground",
        /// FedEx Home Delivery.
        FedexHomeDelivery => "Home Delivery",
        /// UPS Next Day Air.
        UpsNextDayAir => "Next Day Air",
        /// UPS Next Day Air Early AM.
        UpsNextDayAirEarlyAm => "Next Day Air Early AM",
        /// UPS Next Day Air Saver.
        UpsNextDayAirSaver => "Next Day Air Saver",
        /// UPS 2nd Day Air.
        UpsSecondDayAir => "2nd Day Air",
        /// UPS 2nd Day Air AM.
        UpsSecondDayAirAm => "2nd Day Air AM",
        /// UPS 3 Day Select.
        UpsThreeDaySelect => "3 Day Select",
        /// UPS Ground.
        UpsGround => "Ground",
        /// USPS Express Mail.
        UspsExpressMail => "Express Mail",
        /// USPS Priority Mail.
        UspsPriorityMail => "Priority Mail",
        /// USPS Parcel Post.
        UspsParcelPost => "Parcel Post",
        /// USPS Media Mail.
        UspsMediaMail => "Media Mail",
    }
}

impl ShippingType {
    /// The service name as declared, `""` for [`ShippingType::Unknown`].
    #[must_use]
    pub fn serialized_name(self) -> &'static str {
        self.declared_wire_name()
    }

    /// The company offering this service, `""` for [`ShippingType::Unknown`].
    #[must_use]
    pub fn shipping_company(self) -> &'static str {
        match self.carrier() {
            Carrier::Other => "",
            carrier => carrier.wire_name(),
        }
    }

    /// The service `name` offered by `carrier`.
    #[must_use]
    pub fn from_service(carrier: Carrier, name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.carrier() == carrier && v.serialized_name() == name)
    }

    /// The carrier offering this service.
    #[must_use]
    pub fn carrier(self) -> Carrier {
        match self {
            Self::Unknown => Carrier::Other,
            Self::FedexPriorityOvernight
            | Self::FedexStandardOvernight
            | Self::FedexTwoDay
            | Self::FedexExpressSaver
            | Self::FedexGround
            | Self::FedexHomeDelivery => Carrier::FedEx,
            Self::UpsNextDayAir
            | Self::UpsNextDayAirEarlyAm
            | Self::UpsNextDayAirSaver
            | Self::UpsSecondDayAir
            | Self::UpsSecondDayAirAm
            | Self::UpsThreeDaySelect
            | Self::UpsGround => Carrier::Ups,
            Self::UspsExpressMail
            | Self::UspsPriorityMail
            | Self::UspsParcelPost
            | Self::UspsMediaMail => Carrier::Usps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_map_order_states_to_wire_names() {
        assert_eq!(FinancialOrderState::PaymentDeclined.wire_name(), "PAYMENT_DECLINED");
        assert_eq!(
            FinancialOrderState::from_wire("CANCELLED_BY_GOOGLE"),
            Some(FinancialOrderState::CancelledByGoogle)
        );
        assert_eq!(FulfillmentOrderState::WillNotDeliver.to_string(), "WILL_NOT_DELIVER");
        assert_eq!(FulfillmentOrderState::from_wire("new"), None);
    }

    #[test]
    fn test_should_fall_back_to_symbolic_carrier_name() {
        assert_eq!(Carrier::FedEx.wire_name(), "FedEx");
        assert_eq!(Carrier::Other.wire_name(), "Other");
        assert_eq!(Carrier::Ups.wire_name(), "UPS");
        assert_eq!(Carrier::from_wire("FedEx"), Some(Carrier::FedEx));
    }

    #[test]
    fn test_should_declare_nothing_for_unknown_shipping_type() {
        assert_eq!(ShippingType::Unknown.serialized_name(), "");
        assert_eq!(ShippingType::Unknown.shipping_company(), "");
        assert_eq!(ShippingType::Unknown.carrier(), Carrier::Other);
    }

    #[test]
    fn test_should_describe_carrier_services() {
        assert_eq!(ShippingType::FedexTwoDay.serialized_name(), "2Day");
        assert_eq!(ShippingType::FedexTwoDay.shipping_company(), "FedEx");
        assert_eq!(ShippingType::UpsGround.serialized_name(), "Ground");
        assert_eq!(ShippingType::UpsGround.shipping_company(), "UPS");
        assert_eq!(ShippingType::UspsMediaMail.carrier(), Carrier::Usps);
    }

    #[test]
    fn test_should_look_up_shipping_service_per_carrier() {
        assert_eq!(
            ShippingType::from_service(Carrier::Ups, "Ground"),
            Some(ShippingType::UpsGround)
        );
        assert_eq!(
            ShippingType::from_service(Carrier::FedEx, "Ground"),
            Some(ShippingType::FedexGround)
        );
        assert_eq!(ShippingType::from_service(Carrier::Usps, "2Day"), None);
        for &service in ShippingType::VARIANTS {
            if service != ShippingType::Unknown {
                assert_eq!(
                    ShippingType::from_service(service.carrier(), service.serialized_name()),
                    Some(service)
                );
            }
        }
    }
}
