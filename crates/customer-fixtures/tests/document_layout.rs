//! Layout checks on rendered customer documents.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

#[expect(
    dead_code,
    reason = "Shared helpers include functions used only by other integration suites."
)]
mod test_support;

use customer_fixtures::{SOCIAL_ID_MASK, pools::CONSUMPTION_TIERS};
use rstest::{fixture, rstest};
use test_support::{ParsedDocument, parse_document, render_document};

#[fixture]
fn parsed() -> ParsedDocument {
    parse_document(&render_document(60, 99))
}

#[test]
fn header_blocks_precede_the_first_customer() {
    let xml = render_document(1, 1);

    let information = xml.find("<zavann_information>").expect("information block");
    let general = xml.find("<general_data>").expect("general data block");
    let templates = xml
        .find("<standard_templates_settings>")
        .expect("template block");
    let customer = xml.find("<customer>").expect("customer block");

    assert!(information < general && general < templates && templates < customer);
    assert!(xml.contains("<create_month>november</create_month>"));
    assert!(xml.contains("<template_category_id>7100</template_category_id>"));
    assert!(xml.contains("<legal_name/>"));
}

#[rstest]
fn social_ids_share_a_date_prefix(parsed: ParsedDocument) {
    for index in 0..parsed.customers.len() {
        let full = parsed.field(index, "customer/soc_id");
        let reduced = parsed.field(index, "customer/soc_id_reduced");

        assert_eq!(full.len(), 11, "{full}");
        assert_eq!(full.get(..7), reduced.get(..7));
        assert_eq!(reduced.get(7..), Some(SOCIAL_ID_MASK));
        assert_eq!(parsed.field(index, "customer/soc_id_shorten"), reduced);
        assert_eq!(
            parsed.field(index, "customer/social_id_for_digital_registration"),
            full
        );
    }
}

#[rstest]
fn consumption_is_grouped_and_readings_are_multiples(parsed: ParsedDocument) {
    for index in 0..parsed.customers.len() {
        let grouped = parsed.field(index, "site/consumption");
        let plain: u32 = parsed
            .field(index, "site/consumption_as_int")
            .parse()
            .expect("numeric consumption");
        let reading: u32 = parsed
            .field(index, "site/latest_reading")
            .parse()
            .expect("numeric reading");

        assert!(CONSUMPTION_TIERS.contains(&plain));
        assert_eq!(grouped.replace(',', ""), plain.to_string());
        assert_eq!(reading.checked_rem(plain), Some(0));
        assert!((2..=5).contains(&reading.checked_div(plain).expect("non-zero tier")));
    }
}

#[rstest]
fn address_fields_are_duplicated_consistently(parsed: ParsedDocument) {
    for index in 0..parsed.customers.len() {
        let street = parsed.field(index, "customer/customer_address");
        assert_eq!(parsed.field(index, "customer/address"), street);
        assert_eq!(parsed.field(index, "site/address"), street);
        assert_eq!(
            parsed.field(index, "customer/customer_zip_code"),
            parsed.field(index, "site/zip_code")
        );
        assert_eq!(
            parsed.field(index, "customer/customer_city"),
            parsed.field(index, "site/city")
        );
    }
}

#[rstest]
fn phone_list_joins_the_three_numbers(parsed: ParsedDocument) {
    for index in 0..parsed.customers.len() {
        let expected = [
            parsed.field(index, "customer/day_phone"),
            parsed.field(index, "customer/home_phone"),
            parsed.field(index, "customer/cell_phone"),
        ]
        .join(", ");
        assert_eq!(parsed.field(index, "customer/phone_numbers"), expected);
    }
}

#[rstest]
fn record_timestamps_fill_every_create_date(parsed: ParsedDocument) {
    for index in 0..parsed.customers.len() {
        let created = parsed.field(index, "customer/create_date");
        assert_eq!(parsed.field(index, "customer/signup_date"), created);
        assert_eq!(parsed.field(index, "site/create_date"), created);
        assert_eq!(parsed.field(index, "contract/create_date"), "2025-11-06");
    }
}
