//! Prompt construction for route planning.

/// Build the route-planning prompt for one origin/destination pair.
///
/// The user's strings are interpolated literally, with no escaping. That is
/// an accepted risk: whatever the prompt ends up saying, the model's output
/// is still decoded against the declared schema before anything trusts it.
///
/// The prompt asks for exactly 3 itineraries in Hong Kong register
/// Traditional Chinese, with realistic times and HK$ fares, a simulated
/// wait estimate on every public-transport step, and concrete
/// map-searchable place names.
pub fn build_prompt(origin: &str, destination: &str) -> String {
    format!(
        r#"請以香港本地人的習慣，為我規劃 3 條從 "{origin}" 到 "{destination}" 的公共交通路線。

要求：
1. 請提供實際的預計時間和車費（港幣）。
2. 包含港鐵 (MTR)、巴士 (Bus)、電車 (Tram)、渡輪 (Ferry) 或小巴等常見交通工具。
3. 針對公共交通步驟，請根據班次頻率估算一個"等待時間" (waitMinutes)。
4. locationName 必須是具體的站名或地點（例如："中環站 A 出口"、"彌敦道巴士站"）。
5. **所有輸出的文字內容（instruction, summary, locationName 等）必須使用繁體中文（Traditional Chinese），並符合香港用語習慣（例如：用「轉車」不用「換乘」，用「落車」不用「下車」，用「搭」不用「坐」）。**
"#
    )
}
