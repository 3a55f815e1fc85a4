//! Deterministic Arabic reply composition.
//!
//! The composer is the rule-based half of the assistant: given an
//! intent and whatever retrieval produced, it renders a formatted
//! Markdown reply. It is also the universal fallback when a generation
//! provider is unavailable, so its output is the contract the gateway
//! degrades to.

use super::intent::Intent;
use crate::domain::catalog::Product;

/// Reply for an empty or whitespace-only chat message.
pub const INVALID_MESSAGE_REPLY: &str = "الرجاء إدخال رسالة صحيحة.";

const GREETING_REPLY: &str = "🌟 **مرحباً بك في متجرنا!** 🌟

أهلاً وسهلاً! أنا مساعدك الذكي هنا لمساعدتك في العثور على أفضل المنتجات.

**يمكنني مساعدتك في:**
🔍 البحث عن المنتجات
🏷️ عرض العروض والخصومات
⭐ المنتجات المميزة
📂 استعراض الفئات

**كيف يمكنني مساعدتك اليوم؟**";

const SEARCH_EMPTY_REPLY: &str = "🔍 **نتائج البحث**

عذراً، لم أجد منتجات مطابقة لبحثك.

**جرب البحث عن:**
• Carhartt Baggy Pants
• قمصان
• أحذية رياضية
• إكسسوارات

أو اكتب اسم المنتج مباشرة!";

const SALE_EMPTY_REPLY: &str = "🔥 **العروض والخصومات**

لا توجد عروض متاحة حالياً 😔

**لكن لا تقلق!**
• تابعنا للحصول على أحدث العروض
• اشترك في النشرة الإخبارية
• تحقق من المنتجات المميزة

**هل تريد رؤية المنتجات المميزة؟**";

const FEATURED_EMPTY_REPLY: &str = "⭐ **المنتجات المميزة**

لا توجد منتجات مميزة حالياً 🌟

**لكن لدينا منتجات رائعة أخرى!**
• منتجات جديدة
• عروض خاصة
• أكثر المنتجات مبيعاً

**هل تريد البحث عن شيء محدد؟**";

const CATEGORIES_EMPTY_REPLY: &str = "📂 **فئات المنتجات**

عذراً، لا توجد فئات متاحة حالياً 📂

**تحقق لاحقاً للحصول على:**
• فئات جديدة
• منتجات محدثة
• تصنيفات أفضل";

const HELP_REPLY: &str = "🤖 **كيف يمكنني مساعدتك؟**

**الخدمات المتاحة:**

🔍 **البحث عن المنتجات**
• اكتب اسم المنتج (مثل: \"Carhartt pants\")
• ابحث بالفئة (مثل: \"قمصان\")

🏷️ **العروض والخصومات**
• اكتب \"عروض\" أو \"خصومات\"

⭐ **المنتجات المميزة**
• اكتب \"مميز\" أو \"اقتراح\"

📂 **الفئات**
• اكتب \"فئات\" أو \"أقسام\"

**فقط اكتب ما تريد البحث عنه!**";

const GENERAL_EMPTY_REPLY: &str = "👋 **أهلاً بك!**

أنا مساعدك الذكي في متجر الملابس 🛍️

**يمكنك سؤالي عن:**
• المنتجات المتاحة
• العروض والخصومات
• المنتجات المميزة
• أي شيء تريد معرفته

**كيف يمكنني مساعدتك؟**";

const ERROR_GREETING_REPLY: &str = "👋 مرحباً بك في متجرنا! كيف يمكنني مساعدتك اليوم؟";

const ERROR_SEARCH_REPLY: &str =
    "🔍 يمكنك البحث عن المنتجات باستخدام الكلمات المفتاحية مثل \"pants\" أو \"Carhartt\".";

const ERROR_GENERIC_REPLY: &str = "🤖 عذراً، حدث خطأ في النظام. يمكنك تجربة السؤال مرة أخرى.";

/// What retrieval produced for a chat turn.
///
/// The categories intent returns label strings rather than products,
/// so the two shapes are kept distinct instead of overloading one list.
#[derive(Debug, Clone, PartialEq)]
pub enum RetrievedContent {
    Products(Vec<Product>),
    Categories(Vec<String>),
}

impl RetrievedContent {
    /// Content for turns that retrieve nothing (greetings, help).
    pub fn none() -> Self {
        RetrievedContent::Products(Vec::new())
    }

    /// Returns true when retrieval found nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            RetrievedContent::Products(products) => products.is_empty(),
            RetrievedContent::Categories(categories) => categories.is_empty(),
        }
    }

    /// Returns the retrieved products, or an empty slice for category
    /// content.
    pub fn products(&self) -> &[Product] {
        match self {
            RetrievedContent::Products(products) => products,
            RetrievedContent::Categories(_) => &[],
        }
    }
}

/// Renders one product as a Markdown block: name, price (struck-through
/// original when discounted), colors, sizes, and stock marker.
pub fn format_product_info(product: &Product) -> String {
    let price = match product.sale_price() {
        Some(sale) => format!("💰 **{} دينار** ~~{} دينار~~", sale, product.price()),
        None => format!("💰 **{} دينار**", product.price()),
    };

    let mut info = format!("**{}**\n{}\n", product.name(), price);

    if !product.colors().is_empty() {
        info.push_str(&format!("🎨 الألوان: {}\n", product.colors().join(", ")));
    }

    if !product.sizes().is_empty() {
        info.push_str(&format!("📏 المقاسات: {}\n", product.sizes().join(", ")));
    }

    info.push_str(if product.in_stock() {
        "✅ متوفر"
    } else {
        "❌ غير متوفر"
    });

    info
}

/// Composes the rule-based reply for an intent and its retrieved
/// content.
pub fn compose_reply(intent: Intent, content: &RetrievedContent) -> String {
    match intent {
        Intent::Greeting => GREETING_REPLY.to_string(),
        Intent::Help => HELP_REPLY.to_string(),
        Intent::Search => compose_search(content.products()),
        Intent::Sale => compose_sale(content.products()),
        Intent::Featured => compose_featured(content.products()),
        Intent::Categories => match content {
            RetrievedContent::Categories(categories) => compose_categories(categories),
            RetrievedContent::Products(_) => compose_categories(&[]),
        },
        Intent::General => compose_general(content.products()),
    }
}

fn compose_search(products: &[Product]) -> String {
    if products.is_empty() {
        return SEARCH_EMPTY_REPLY.to_string();
    }

    let mut reply = format!("🔍 **نتائج البحث** ({} منتج)\n\n", products.len());

    for (index, product) in products.iter().take(3).enumerate() {
        reply.push_str(&format!(
            "**{}.** {}\n\n",
            index + 1,
            format_product_info(product)
        ));
    }

    if products.len() > 3 {
        reply.push_str(&format!(
            "📋 **وهناك {} منتج آخر متاح!**\n\nهل تريد رؤية المزيد؟",
            products.len() - 3
        ));
    }

    reply
}

fn compose_sale(products: &[Product]) -> String {
    if products.is_empty() {
        return SALE_EMPTY_REPLY.to_string();
    }

    let mut reply = format!("🔥 **العروض الحالية** ({} منتج)\n\n", products.len());

    for (index, product) in products.iter().enumerate() {
        let discount = product.discount_percent().unwrap_or(0);
        reply.push_str(&format!(
            "**{}.** {}\n💸 **خصم {}%**\n\n",
            index + 1,
            format_product_info(product),
            discount
        ));
    }

    reply.push_str("⏰ **أسرع! العروض محدودة**");

    reply
}

fn compose_featured(products: &[Product]) -> String {
    if products.is_empty() {
        return FEATURED_EMPTY_REPLY.to_string();
    }

    let mut reply = format!("⭐ **منتجاتنا المميزة** ({} منتج)\n\n", products.len());

    for (index, product) in products.iter().enumerate() {
        reply.push_str(&format!(
            "**{}.** {}\n📝 {}\n\n",
            index + 1,
            format_product_info(product),
            product.description()
        ));
    }

    reply.push_str("🌟 **هذه أفضل اختياراتنا لك!**");

    reply
}

fn compose_categories(categories: &[String]) -> String {
    if categories.is_empty() {
        return CATEGORIES_EMPTY_REPLY.to_string();
    }

    let mut reply = "📚 **الفئات المتاحة في متجرنا**\n\n".to_string();

    for (index, category) in categories.iter().enumerate() {
        reply.push_str(&format!("**{}.** {}\n", index + 1, category));
    }

    reply.push_str("\n🔍 **يمكنك البحث في أي فئة تهمك!**");

    reply
}

fn compose_general(products: &[Product]) -> String {
    if products.is_empty() {
        return GENERAL_EMPTY_REPLY.to_string();
    }

    let mut reply = "🛍️ **وجدت بعض المنتجات التي قد تهمك!**\n\n".to_string();

    for (index, product) in products.iter().take(2).enumerate() {
        reply.push_str(&format!(
            "**{}.** {}\n\n",
            index + 1,
            format_product_info(product)
        ));
    }

    reply.push_str("**هل تريد المزيد من التفاصيل؟**");

    reply
}

/// Short canned reply used when a chat turn fails in a way nothing
/// else handled. Keyed by re-classifying the original message.
pub fn canned_reply(intent: Intent) -> &'static str {
    match intent {
        Intent::Greeting => ERROR_GREETING_REPLY,
        Intent::Search => ERROR_SEARCH_REPLY,
        _ => ERROR_GENERIC_REPLY,
    }
}
