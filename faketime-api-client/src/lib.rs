use faketime_api_schema::set_faketime::SetFaketimeRequest;

#[derive(Debug, Clone)]
pub struct FaketimeApiClient {
    pub base_url: String,
}

#[derive(Debug)]
pub enum FaketimeApiClientError {
    Ureq(Box<ureq::Error>),
    IO(Box<std::io::Error>),
}

impl FaketimeApiClient {
    pub fn new(base_url: String) -> Self {
        let mut base_url = base_url;
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn set_faketime(&self, request: SetFaketimeRequest) -> Result<(), FaketimeApiClientError> {
        let url = format!("{}/", self.base_url);
        let set_faketime_res = ureq::post(&url)
            .send_json(request)
            .map_err(|e| FaketimeApiClientError::Ureq(Box::new(e)))?;
        set_faketime_res
            .into_string()
            .map_err(|e| FaketimeApiClientError::IO(Box::new(e)))?;
        Ok(())
    }
}
