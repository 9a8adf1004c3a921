//! Build-time configuration constants.
//!
//! The EmailJS identifiers parameterize every outbound send; they are fixed
//! at build time and only validated by the provider at call time. The
//! fallback address shown in failure messages is deliberately a separate
//! constant from the recipient identity (`MAIL_TO_NAME`) even though the
//! values currently belong to the same person.

/// EmailJS service identifier.
pub const EMAILJS_SERVICE_ID: &str = "service_xdqzkfj";

/// EmailJS template identifier.
pub const EMAILJS_TEMPLATE_ID: &str = "template_69vdab8";

/// EmailJS public key.
pub const EMAILJS_PUBLIC_KEY: &str = "OenvfQrW-t5uKx_AQ";

/// Display name the email template addresses messages to.
pub const MAIL_TO_NAME: &str = "Abdilaziz Nasir";

/// Address offered in failure messages as a direct-contact escape hatch.
pub const FALLBACK_EMAIL: &str = "harolife31@gmail.com";

/// Site owner's display name.
pub const OWNER_NAME: &str = "Abdilaziz Nasir";

/// Two-letter logotype used by the nav and the loading screen.
pub const LOGO: &str = "AN";

/// Contact details shown in the contact section and footer.
pub const CONTACT_EMAIL: &str = "harolife31@gmail.com";
pub const CONTACT_PHONE: &str = "+251 902271650";
pub const CONTACT_PHONE_TEL: &str = "+251902271650";
pub const CONTACT_LOCATION: &str = "Addis Ababa, Ethiopia";

/// Social profile URLs.
pub const GITHUB_URL: &str = "https://github.com/AbdilazizNasir96";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/abdilaziz-nasir";
pub const TWITTER_URL: &str = "https://twitter.com/abdilaziz_nasir";
pub const UPWORK_URL: &str = "https://www.upwork.com/freelancers/~your-profile";

/// Document title and meta description.
pub const SITE_TITLE: &str = "Abdilaziz Nasir - Full Stack Developer";
pub const SITE_DESCRIPTION: &str = "Professional portfolio of Abdilaziz Nasir - Full Stack Developer specializing in Flutter, Next.js, React.js, C#, ASP.NET, and modern web technologies.";
