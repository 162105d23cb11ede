/// A trigger phrase and the reply sent verbatim when it matches.
///
/// Triggers are lower-case; matching compares against lower-cased message
/// text. Table order decides which entry wins when a message contains more
/// than one trigger.
#[derive(Debug, Clone, Copy)]
pub struct CannedResponse {
    pub trigger: &'static str,
    pub reply: &'static str,
}

/// Returns the built-in canned responses, in match priority order.
pub fn canned_responses() -> &'static [CannedResponse] {
    &[
        CannedResponse {
            trigger: "manifest error",
            reply: "Seriously? Did you even unzip the folder or just stare at it like a confused potato? Open the inner 'Luperly' folder, genius.",
        },
        CannedResponse {
            trigger: "work.ink blocked",
            reply: "Oh look, you broke it again. Clear cookies or go incognito, maybe next time use a brain.",
        },
        CannedResponse {
            trigger: "extender load",
            reply: "Maybe try Chrome? Or is that too advanced for you?",
        },
        CannedResponse {
            trigger: "stuck on bypassing",
            reply: "Patience isn\u{2019}t your strong suit, huh? Wait for the update, or cry silently.",
        },
        CannedResponse {
            trigger: "failed session controller",
            reply: "Your PC is slow, obviously. Hard reload, only click the captcha, and try not to mess it up.",
        },
        CannedResponse {
            trigger: "volcano key system",
            reply: "Do NOT switch browsers, Captain Clueless. Follow the instructions like a normal human.",
        },
        CannedResponse {
            trigger: "volcano cooldown",
            reply: "Open the Cooldown Editor and adjust it yourself. Don\u{2019}t whine about it.",
        },
        CannedResponse {
            trigger: "general fix",
            reply: "Reinstall, remove everything else, enable incognito, open the link. It\u{2019}s literally not rocket science.",
        },
    ]
}
