//! Prompt assembly for generation providers.
//!
//! Every provider receives the same Arabic prompt: a context line
//! describing what retrieval did, the retrieved products as bullets,
//! a fixed instruction block, and the customer's question.

use crate::domain::catalog::Product;

/// Context line for a product search turn.
pub fn search_context(terms: &str) -> String {
    format!("البحث عن: {}", terms)
}

/// Context line for a sale turn.
pub const SALE_CONTEXT: &str = "المنتجات المخفضة";

/// Context line for a featured-products turn.
pub const FEATURED_CONTEXT: &str = "المنتجات المميزة";

/// Context line for a categories turn.
pub const CATEGORIES_CONTEXT: &str = "فئات المنتجات";

/// Context line for a greeting turn.
pub const GREETING_CONTEXT: &str = "ترحيب بالعميل";

/// Context line when a general turn found related products.
pub const RELATED_PRODUCTS_CONTEXT: &str = "منتجات ذات صلة";

/// Context line when a general turn found nothing.
pub const GENERAL_INQUIRY_CONTEXT: &str = "استفسار عام";

/// Builds the prompt sent to a generation provider.
pub fn build_prompt(context: &str, products: &[Product], message: &str) -> String {
    let product_lines = products
        .iter()
        .map(|p| {
            let colors = join_or_unspecified(p.colors());
            let sizes = join_or_unspecified(p.sizes());
            format!(
                "- {}: {} دينار، الألوان: {}، المقاسات: {}",
                p.name(),
                p.price(),
                colors,
                sizes
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "أنت مساعد ذكي لمتجر ملابس. السياق: {context}

المنتجات المتاحة:
{product_lines}

تعليمات:
- استخدم اللغة العربية
- نظم الرد بشكل جميل مع الرموز التعبيرية
- اجعل الرد مفيداً وجذاباً
- لا تتجاوز 200 كلمة

سؤال العميل: {message}"
    )
}

fn join_or_unspecified(values: &[String]) -> String {
    if values.is_empty() {
        "غير محدد".to_string()
    } else {
        values.join(", ")
    }
}
