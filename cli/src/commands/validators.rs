use std::path::{Component, Path};

/// Any catalogue key is a valid name, so only the empty string is refused.
pub fn validate_name(name: &str) -> Result<String, String> {
    if name.is_empty() {
        return Err("Name must not be empty".to_string());
    }
    Ok(name.to_string())
}

/// `-f` names a file inside the load directory.
pub fn validate_file_name(file: &str) -> Result<String, String> {
    if file.trim().is_empty() {
        return Err("File name must not be empty".to_string());
    }
    let path = Path::new(file);
    if path.is_absolute() || path.components().any(|c| c == Component::ParentDir) {
        return Err(format!(
            "File must be relative to the directory given with -d: {file}"
        ));
    }
    Ok(file.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("request1").is_ok());
        assert!(validate_name("get user").is_ok());
        assert!(validate_name("{param}").is_ok());
        assert!(validate_name(&"a".repeat(101)).is_ok());

        assert!(validate_name("").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("api-requests").is_ok());
        assert!(validate_file_name("nested/api.yml").is_ok());

        assert!(validate_file_name("").is_err());
        assert!(validate_file_name("../outside.yaml").is_err());
        assert!(validate_file_name("/etc/passwd").is_err());
    }
}
