//! Fixed XML layout of the customer document.
//!
//! Tag names, their order and the constant values are consumed verbatim by
//! the ingesting system and must not change. Only the generation metadata in
//! `general_data` and the per-record values vary between runs.

use std::io::{self, Write};

use chrono::{Datelike, Month, NaiveDateTime};

use crate::record::CustomerRecord;
use crate::xml::{Field, XmlSink};

/// Root element of the document.
pub const ROOT_TAG: &str = "customers";

/// Element wrapping one generated record.
pub const CUSTOMER_TAG: &str = "customer";

/// Element nested once inside every customer.
pub const SITE_TAG: &str = "site";

/// Element nested once inside every site.
pub const CONTRACT_TAG: &str = "contract";

const TEMPLATE_CATEGORY_ID: &str = "7100";

const ZAVANN_INFORMATION: &[Field<'static>] = &[
    ("organization_system_name", "Zavann AB"),
    ("phone", "+46 10 19 55 099"),
    ("legal_name", ""),
    ("organization_name", "EG Software Sweden AB"),
    ("postal_address", "Sankt Göransgatan 63"),
    ("box_address", ""),
    ("zip_code_city", "11238 Stockholm"),
    ("visiting_address", "Sankt Göransgatan 63"),
    ("visiting_zip_code_city", "11238 Stockholm"),
    ("email", "support@zavann.se"),
    ("organization_number", "556751-5514"),
    ("organization_website", "www.zavann.se"),
    ("phone_hours", "mån-fre 08-16"),
];

const STANDARD_TEMPLATES_SETTINGS: &[Field<'static>] = &[
    ("logotype", "telinet-logo.jpg"),
    ("logo_height", "40px"),
    ("font", "Arial"),
    ("font_size", "10pt"),
    ("font_color", "#000000"),
    ("text_box_color", ""),
    ("text_box_border_color", ""),
    ("footer_border_color", ""),
    ("header_color", ""),
    ("logo_position", "left"),
    ("header_border_color", ""),
    ("footer_color", ""),
];

const CONTRACT_TERMS: &[Field<'static>] = &[
    ("periodicity", "3"),
    ("transaction_type_id", "1"),
    ("termination_type_id", "0"),
    ("sale_date", "2023-11-01"),
    ("start_date", "2024-01-01"),
    ("con_start_type_id", "1"),
    ("create_date", "2025-11-06"),
    ("ep_product_name", "Fast pris"),
    ("current_price", "102.6"),
    ("current_total_price", "128.25"),
    ("monthly_fee", "19"),
    ("monthly_fee_excluding_vat", "15.2"),
    ("fixed_price", "1"),
    ("mixed_price", "0"),
];

/// Writes the organization, generation and template header blocks.
pub(crate) fn write_header<W: Write>(
    xml: &mut XmlSink<W>,
    generated_at: NaiveDateTime,
) -> io::Result<()> {
    xml.section("zavann_information", ZAVANN_INFORMATION)?;

    let create_date = generated_at.format("%Y-%m-%d").to_string();
    let create_time = generated_at.format("%H:%M").to_string();
    let create_year = generated_at.year().to_string();
    let create_day = generated_at.day().to_string();
    let create_month = u8::try_from(generated_at.month())
        .ok()
        .and_then(|number| Month::try_from(number).ok())
        .map_or("", swedish_month);
    xml.section(
        "general_data",
        &[
            ("create_date", &create_date),
            ("create_time", &create_time),
            ("create_month", create_month),
            ("create_year", &create_year),
            ("create_day", &create_day),
            ("template_category_id", TEMPLATE_CATEGORY_ID),
        ],
    )?;

    xml.section("standard_templates_settings", STANDARD_TEMPLATES_SETTINGS)
}

/// Writes one `customer` element with its nested site and contract.
pub(crate) fn write_customer<W: Write>(
    xml: &mut XmlSink<W>,
    record: &CustomerRecord,
) -> io::Result<()> {
    let phones = record.phones.joined();
    let soc_id = record.social_id.full();
    let soc_id_reduced = record.social_id.reduced();
    let customer_id = record.identity.customer_id.to_string();
    let street = record.address.street_line();
    let zip_code = record.address.zip_code.to_string();
    let day_phone = record.phones.day.to_string();
    let home_phone = record.phones.home.to_string();
    let cell_phone = record.phones.cell.to_string();
    let created_at = record.created_at_text();

    xml.open(CUSTOMER_TAG)?;
    xml.fields(&[
        ("first_page_sequnce_number", "0"),
        ("is_password_set", "0"),
        ("phone_numbers", &phones),
        ("soc_id_shorten", &soc_id_reduced),
        ("organization_name", "Telinet Energi AB"),
        ("organization_legally_name", "Telinet Energi AB"),
        ("organization_phone_hours", "Mån-tors: 08-17, Fre: 09-17"),
        ("organization_phone", "0771-456 150"),
        ("master_organization_phone", "0771-456 150"),
        ("organization_care_of_address", ""),
        ("organization_address", "Oxenstiernsgatan 15 A"),
        ("organization_zip_code_city", "115 27 Stockholm"),
        ("organization_image", "telinet-logo.jpg"),
        ("social_id_for_digital_registration", &soc_id),
        ("organization_email", "kundservice@telinet.se"),
        ("organization_postgiro", ""),
        ("organization_bankgiro", "168-6039"),
        ("organization_bankgiro_ocr", "168-6039"),
        ("organization_number", "556766-5053"),
        ("organization_account_number", ""),
        ("organization_website", "www.telinet.se"),
        ("organization_border_city", ""),
        ("organization_box_address", ""),
        ("backgroundColor", "#E6E7EC"),
        ("headerBackgroundColor", "#FFFFFF"),
        ("paymentButtonColor", "#2dc0d0"),
        ("linkColor", "#0645AD"),
        ("customer_id", &customer_id),
        ("first_name", record.first_name),
        ("last_name", record.last_name),
        ("company_name", ""),
        ("soc_id_reduced", &soc_id_reduced),
        ("soc_id", &soc_id),
        ("email", &record.email),
        ("organization_sys_name", "TELINET"),
        ("organization_id", "5"),
        ("care_of", ""),
        ("customer_address", &street),
        ("address", &street),
        ("street_number", ""),
        ("customer_zip_code", &zip_code),
        ("zip_code", &zip_code),
        ("customer_city", record.address.city),
        ("city", record.address.city),
        ("country", "Sweden"),
        ("day_phone", &day_phone),
        ("home_phone", &home_phone),
        ("cell_phone", &cell_phone),
        ("create_date", &created_at),
        ("passwd", ""),
        ("signup_date", &created_at),
        ("contract_source_id", "101"),
        ("agent_name", ""),
        ("agent_id", ""),
        ("supplier_cancellation_notice", ""),
        ("additional_message", ""),
        ("has_postal_dispatch", "0"),
        ("internal_id", "Ng.."),
        ("customer_type_id", "1"),
        ("is_company", "0"),
        ("show_excl_vat", "0"),
    ])?;
    write_site(xml, record, &street, &zip_code, &created_at)?;
    xml.close(CUSTOMER_TAG)
}

fn write_site<W: Write>(
    xml: &mut XmlSink<W>,
    record: &CustomerRecord,
    street: &str,
    zip_code: &str,
    created_at: &str,
) -> io::Result<()> {
    let site_id = record.identity.site_id.to_string();
    let object_id = record.identity.object_id.to_string();
    let consumption = group_thousands(record.billing.consumption);
    let consumption_as_int = record.billing.consumption.to_string();
    let latest_reading = record.billing.latest_reading.to_string();

    xml.open(SITE_TAG)?;
    xml.fields(&[
        ("site_id", &site_id),
        ("campaign_code", ""),
        ("ip_address", ""),
        ("object_id", &object_id),
        ("serial_id", ""),
        ("consumption", &consumption),
        ("address", street),
        ("street_number", ""),
        ("zip_code", zip_code),
        ("city", record.address.city),
        ("payment_type", "Bank giro service"),
        ("electricity_supplier", ""),
        ("cancellation_date", ""),
        ("create_date", created_at),
        ("delivery_start_date", "2024-01-01 00:00:00"),
        ("latest_reading", &latest_reading),
        ("latest_reading_date", "2025-11-01 00:00:00"),
        ("current_state", "Delivery in progress"),
        ("current_state_reason", ""),
        ("is_site_complete", "1"),
        ("consumption_as_int", &consumption_as_int),
        ("has_received_registration_confirmation", "0"),
        ("net_owner_name", "Växjö Energi Elnät AB"),
        ("net_owner_name_abbr", ""),
        ("electricity_area_id", "4"),
        ("electricity_area_name", "SE4"),
        ("invoice_presentation_id", "3"),
        ("net_area_name", "VXO"),
        ("site_organization_id", "5"),
        ("site_organization_name", "Telinet Energi AB"),
        ("is_production_site", "0"),
    ])?;

    let contract_id = record.identity.contract_id().to_string();
    xml.open(CONTRACT_TAG)?;
    xml.field("contract_id", &contract_id)?;
    xml.fields(CONTRACT_TERMS)?;
    xml.close(CONTRACT_TAG)?;

    xml.close(SITE_TAG)
}

/// Renders `value` with `,` between groups of three digits.
fn group_thousands(value: u32) -> String {
    let mut reversed = String::new();
    for (position, digit) in value.to_string().chars().rev().enumerate() {
        if position != 0 && position.checked_rem(3) == Some(0) {
            reversed.push(',');
        }
        reversed.push(digit);
    }
    reversed.chars().rev().collect()
}

const fn swedish_month(month: Month) -> &'static str {
    match month {
        Month::January => "januari",
        Month::February => "februari",
        Month::March => "mars",
        Month::April => "april",
        Month::May => "maj",
        Month::June => "juni",
        Month::July => "juli",
        Month::August => "augusti",
        Month::September => "september",
        Month::October => "oktober",
        Month::November => "november",
        Month::December => "december",
    }
}
