use serde::{Deserialize, Serialize};
use crate::models::Envelope;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct BusinessListing {
    pub url: String,
    pub name: String,
    pub rating: f64,
    pub price: Option<String>,
    pub image_url: String,
}

#[derive(Deserialize, Debug)]
pub struct BusinessSearchResponse {
    pub businesses: Vec<Business>,
}

#[derive(Deserialize, Debug)]
pub struct Business {
    pub url: String,
    pub name: String,
    pub rating: f64,
    // absent for businesses Yelp has no price level for
    #[serde(default)]
    pub price: Option<String>,
    pub image_url: String,
}

impl Envelope for BusinessSearchResponse {
    type Item = Business;

    fn into_items(self) -> Vec<Business> {
        self.businesses
    }
}

impl TryFrom<Business> for BusinessListing {
    type Error = anyhow::Error;

    fn try_from(business: Business) -> anyhow::Result<Self> {
        Ok(Self {
            url: business.url,
            name: business.name,
            rating: business.rating,
            price: business.price,
            image_url: business.image_url,
        })
    }
}
