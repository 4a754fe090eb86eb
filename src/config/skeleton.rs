/// Skeleton settings file written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# Pixsea settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
# Pixabay API key (https://pixabay.com/api/docs/).\n\
# The PIXSEA_API_KEY environment variable and --api-key flag override this value.\n\
api_key = \n\
#\n\
# Search endpoint\n\
endpoint = https://pixabay.com/api/\n\
#\n\
# Results requested per page (1-200)\n\
per_page = 12\n\
#\n\
# Image filters: image_type = all | photo | illustration | vector\n\
image_type = photo\n\
# orientation = all | horizontal | vertical\n\
orientation = horizontal\n\
safe_search = false\n\
#\n\
# HTTP request timeout in seconds\n\
request_timeout_secs = 15\n";
