//! Contact details and identity for the company behind the site.

/// Facts printed on the contact page and in the footer.
#[derive(Debug, Clone, Copy)]
pub struct CompanyDetails {
    pub name: &'static str,
    pub short_name: &'static str,
    pub street: &'static str,
    pub city: &'static str,
    pub postal: &'static str,
    pub country: &'static str,
    pub orders_email: &'static str,
    pub inquiries_email: &'static str,
    pub phone: &'static str,
    pub toll_free: &'static str,
    pub map_url: &'static str,
}

pub const COMPANY: CompanyDetails = CompanyDetails {
    name: "Canada Sheet Metal",
    short_name: "CSM",
    street: "123 Industrial Avenue",
    city: "Toronto, Ontario",
    postal: "M5V 2K7",
    country: "Canada",
    orders_email: "orders@canadasheetmetal.com",
    inquiries_email: "inquiry@canadasheetmetal.com",
    phone: "+1 (416) 555-1234",
    toll_free: "Toll Free: 1-800-555-1234",
    map_url: "https://www.google.com/maps/search/?api=1&query=123+Industrial+Avenue+Toronto+Ontario",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_channels_look_routable() {
        assert!(COMPANY.orders_email.contains('@'));
        assert!(COMPANY.inquiries_email.contains('@'));
        assert!(COMPANY.map_url.starts_with("https://"));
    }
}
