use async_trait::async_trait;
use kizmet::{
    cache::{CachedPage, RenderCache},
    documents::DocumentType,
    errors::{CacheError, ContentError},
    query::Query,
    site::SitePath,
    source::{ContentSource, Perspective},
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// --- Fake Content Source ---

/// One recorded fetch: which perspective served it and the rendered query.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedFetch {
    pub perspective: Perspective,
    pub document_type: String,
    pub groq: String,
}

/// An in-memory content store.
///
/// Responses are programmed per document type. Unprogrammed `First` queries
/// return `null` and unprogrammed `All` queries return `[]`, which is what an
/// empty dataset returns.
#[derive(Clone, Debug)]
pub struct FakeContentSource {
    perspective: Perspective,
    responses: Arc<Mutex<HashMap<String, Value>>>,
    failures: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<RecordedFetch>>>,
}

impl FakeContentSource {
    pub fn new(perspective: Perspective) -> Self {
        Self {
            perspective,
            responses: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn published() -> Self {
        Self::new(Perspective::Published)
    }

    pub fn drafts() -> Self {
        Self::new(Perspective::Drafts)
    }

    /// Programs the raw result returned for a document type.
    pub fn set(&self, document_type: DocumentType, result: Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .insert(document_type.as_str().to_string(), result);
        self
    }

    /// Makes every fetch of a document type fail.
    pub fn fail(&self, document_type: DocumentType) -> &Self {
        self.failures
            .lock()
            .unwrap()
            .push(document_type.as_str().to_string());
        self
    }

    /// Retrieves the recorded fetches for assertion.
    pub fn get_calls(&self) -> Vec<RecordedFetch> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl ContentSource for FakeContentSource {
    fn perspective(&self) -> Perspective {
        self.perspective
    }

    async fn fetch(&self, query: &Query) -> Result<Value, ContentError> {
        let document_type = query.document_type.as_str().to_string();
        self.calls.lock().unwrap().push(RecordedFetch {
            perspective: self.perspective,
            document_type: document_type.clone(),
            groq: query.to_groq(),
        });

        if self.failures.lock().unwrap().contains(&document_type) {
            return Err(ContentError::Fetch(format!(
                "FakeContentSource: programmed failure for '{document_type}'"
            )));
        }

        let responses = self.responses.lock().unwrap();
        Ok(match responses.get(&document_type) {
            Some(value) => value.clone(),
            None => match query.selector {
                kizmet::query::Selector::All => json!([]),
                kizmet::query::Selector::First => Value::Null,
            },
        })
    }
}

// --- Spy Render Cache ---

/// A [`RenderCache`] that records every operation.
#[derive(Clone, Debug, Default)]
pub struct SpyRenderCache {
    pages: Arc<Mutex<HashMap<SitePath, CachedPage>>>,
    invalidations: Arc<Mutex<Vec<SitePath>>>,
    inserts: Arc<Mutex<Vec<SitePath>>>,
    fail_invalidations: Arc<Mutex<bool>>,
}

impl SpyRenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent invalidations fail.
    pub fn fail_invalidations(&self) {
        *self.fail_invalidations.lock().unwrap() = true;
    }

    pub fn invalidations(&self) -> Vec<SitePath> {
        self.invalidations.lock().unwrap().clone()
    }

    pub fn inserts(&self) -> Vec<SitePath> {
        self.inserts.lock().unwrap().clone()
    }

    pub fn contains(&self, path: SitePath) -> bool {
        self.pages.lock().unwrap().contains_key(&path)
    }

    /// Seeds an entry without recording an insert.
    pub fn seed(&self, path: SitePath, html: &str) {
        self.pages
            .lock()
            .unwrap()
            .insert(path, CachedPage::new(html.to_string()));
    }
}

#[async_trait]
impl RenderCache for SpyRenderCache {
    async fn get(&self, path: SitePath) -> Option<CachedPage> {
        self.pages.lock().unwrap().get(&path).cloned()
    }

    async fn insert(&self, path: SitePath, page: CachedPage) {
        self.inserts.lock().unwrap().push(path);
        self.pages.lock().unwrap().insert(path, page);
    }

    async fn invalidate(&self, path: SitePath) -> Result<(), CacheError> {
        if *self.fail_invalidations.lock().unwrap() {
            return Err(CacheError::Unavailable(
                "SpyRenderCache: programmed failure".to_string(),
            ));
        }
        self.invalidations.lock().unwrap().push(path);
        self.pages.lock().unwrap().remove(&path);
        Ok(())
    }
}

// --- Fixtures ---

pub mod fixtures {
    use serde_json::{json, Value};

    pub fn site_settings() -> Value {
        json!({
            "brandName": "Kizmet Test",
            "tagline": "Massage and Wellness",
            "phone": "(360) 555-0100",
            "email": "desk@kizmet.test",
            "address": { "street": "1 Harbor Way", "city": "Port Angeles", "state": "WA", "zip": "98362" },
            "bookingUrl": null,
            "seo": {
                "siteUrl": "https://kizmet.test",
                "metaTitle": null,
                "metaDescription": "Massage in Port Angeles.",
                "socialImage": null,
                "twitterHandle": "kizmet",
                "instagramHandle": null,
                "facebookUrl": null
            },
            "businessInfo": {
                "businessType": "DaySpa",
                "priceRange": "$$",
                "businessHours": [
                    { "days": ["Monday", "Tuesday"], "opens": "09:00", "closes": "17:00" }
                ],
                "geoCoordinates": { "latitude": 48.118, "longitude": -123.43 },
                "googleMapsUrl": null,
                "googlePlaceId": null
            }
        })
    }

    pub fn services() -> Value {
        json!([
            { "_id": "svc-b", "name": "Hot Stone", "duration": "75 min", "price": "$120", "description": "Warm basalt stones.", "order": 2 },
            { "_id": "svc-c", "name": "Chair Massage", "duration": "15 min", "price": "$25", "description": null, "order": null },
            { "_id": "svc-a", "name": "Cupping", "duration": "45 min", "price": "$80", "description": "Suction therapy.", "order": 1 }
        ])
    }

    pub fn testimonials() -> Value {
        json!([
            { "_id": "t1", "authorName": "Sarah M.", "authorLocation": "Sequim, WA", "quote": "Best massage I've had.", "featured": true, "order": 1 }
        ])
    }
}
