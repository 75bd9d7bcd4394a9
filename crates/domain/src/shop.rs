use crate::shared::entity::{Entity, ID};
use hurry_utils::create_random_secret;

const API_KEY_LEN: usize = 30;

/// A `Shop` is the merchant account owning a set of countdown timers.
/// Admin requests authenticate with the shop's secret api key and are
/// scoped to its domain.
#[derive(Debug, Clone)]
pub struct Shop {
    pub id: ID,
    pub domain: String,
    pub secret_api_key: String,
}

impl Shop {
    pub fn new(domain: &str) -> Self {
        Self {
            id: Default::default(),
            domain: domain.to_string(),
            secret_api_key: Self::generate_secret_api_key(),
        }
    }

    pub fn generate_secret_api_key() -> String {
        let rand_secret = create_random_secret(API_KEY_LEN);
        format!("sk_{}", rand_secret)
    }
}

impl Entity for Shop {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_creates_shop_with_api_key() {
        let shop = Shop::new("demo.myshopify.com");
        assert_eq!(shop.domain, "demo.myshopify.com");
        assert!(shop.secret_api_key.starts_with("sk_"));
        assert!(shop.secret_api_key.len() > API_KEY_LEN);
    }
}
