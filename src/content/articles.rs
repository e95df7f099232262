//! The article library for the Resources section.
//!
//! Body paragraphs are markdown fragments; the article page renders each
//! one through `pulldown-cmark`.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

/// One editorial article.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub category: &'static str,
    pub body: &'static [&'static str],
}

/// Every article, in display order.
pub fn articles() -> &'static [Article] {
    ARTICLES
}

/// Look up an article by its URL slug.
pub fn article_by_slug(slug: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|article| article.slug == slug)
}

/// Filter chips for the Resources page: "All" plus each distinct category,
/// in first-appearance order.
pub fn article_categories() -> Vec<&'static str> {
    let mut out = vec!["All"];
    for article in ARTICLES {
        if !out.contains(&article.category) {
            out.push(article.category);
        }
    }
    out
}

static ARTICLES: &[Article] = &[
    Article {
        slug: "what-is-mindful-drinking",
        title: "Beyond \"Just One Drink\": A Guide to Mindful Drinking",
        summary: "Learn how to be more present and intentional with your drinking habits, helping you build a healthier relationship with alcohol without the pressure of quitting.",
        category: "Mindful Drinking",
        body: &[
            "Mindful drinking isn't about stopping entirely; it's about paying attention. It is the practice of being fully present with each sip, making conscious choices rather than falling into old habits. Many of us drink on autopilot—a glass of wine after a stressful day, a beer while watching TV, a cocktail to ease social anxiety. Mindful drinking interrupts this cycle. It asks you to pause and ask a simple question: 'Do I truly want this drink right now, and why?'",
            "This simple act of questioning can be incredibly powerful. It helps you distinguish between a genuine desire to savor a drink and a habitual response to a trigger. The goal is to shift your focus from the intoxicating effect to the sensory experience—the aroma, the taste, the texture. By doing so, you naturally slow down, consume less, and enjoy what you do drink far more. It's about regaining control and ensuring that every choice you make is an intentional one.",
            "A great way to begin is by engaging all your senses. Before you take a sip, take a moment to look at the drink. Notice its color and clarity. Swirl it and see how it moves. Bring the glass to your nose and inhale the aroma. What do you smell? Finally, take a small sip and hold it in your mouth. Notice the initial taste, the feeling on your tongue, and the aftertaste. By putting your glass down between sips and alternating with a glass of water, you create space to check in with yourself and decide if you truly want more.",
            "Practicing mindful drinking can be challenging in social situations. You might feel pressure to keep up or worry about what others will think. A good strategy is to decide on your limit *before* you go out. Ordering a non-alcoholic drink first or having one between alcoholic beverages can also help. Remember, you don't owe anyone an explanation. A simple 'I'm pacing myself tonight' is usually enough. If you find yourself consistently drinking more than you intend to, even when trying to be mindful, it might be a signal that you could benefit from more support. Exploring this is a sign of strength. Our Support section is available 24/7 with confidential resources that can help.",
            "As you become more mindful, you might notice that some urges to drink are not gentle desires but powerful, automatic cravings. This is your brain's habit system kicking in. Instead of fighting it, you can apply a mindful technique called 'urge surfing.' The idea is to observe the craving as a physical sensation without acting on it. Notice where you feel it in your body. This awareness helps you understand your triggers—the specific situations, people, or feelings that spark a craving. Once you know your triggers (e.g., finishing work, feeling stressed), you can use distraction techniques to ride out the urge, which typically peaks in 15-20 minutes. Simple distractions can be very effective: make a cup of tea, put on a specific song you love, or step outside for a minute of fresh air. This combination of mindful observation and gentle distraction weakens the craving's power over time.",
        ],
    },
    Article {
        slug: "understanding-alcohol-cravings",
        title: "Surviving the Urge: How to Beat Cravings in the Moment",
        summary: "Cravings can feel overwhelming, but they are temporary. Discover practical, in-the-moment strategies to navigate the urge to drink.",
        category: "Coping Strategies",
        body: &[
            "An alcohol craving is a powerful, intense urge to drink that can feel completely overwhelming. It's not just a passing thought; it's a physiological and psychological response. Your brain has learned to associate cues with the rewarding effect of alcohol. When you encounter one of these triggers, your brain's reward system creates a powerful urge that demands to be satisfied. The most important thing to remember is this: cravings are temporary. Like a wave, they build, peak, and then crash. Your job is to learn how to ride out the wave without giving in.",
            "The first step in managing cravings is to understand your triggers. These are the cues that set off the urge to drink. They fall into two categories. **External triggers** are people, places, and things, like seeing a specific friend you always drink with, walking past your local pub, or even just hearing the sound of a bottle opening. **Internal triggers** are your own thoughts and feelings, such as stress, boredom, loneliness, or even happiness and a desire to celebrate. Try keeping a simple note for a week: when a craving hits, jot down who you were with, where you were, what you were doing, and how you were feeling. Spotting these patterns is the key to anticipating and preparing for cravings before they take hold.",
            "A proven technique for managing cravings is 'urge surfing.' Instead of fighting the urge, which can make it stronger, you mindfully observe it. **1. Acknowledge it:** Say to yourself, 'This is a craving. I feel an urge to drink.' **2. Feel it physically:** Where is it in your body? A knot in your stomach? Tension in your shoulders? A dry mouth? Just notice the sensation without judgment. **3. Ride the wave:** Remind yourself that this feeling is temporary and will pass. Imagine yourself surfing over the peak of the craving. Breathe deeply and focus on the physical sensations as they rise and then inevitably start to fade. By not acting on the urge, you are rewiring your brain and teaching it that you are in control, not the craving.",
            "While you're urge surfing, distraction is your best friend. The goal is to shift your focus for 15-20 minutes until the peak of the urge passes. Instead of fighting the craving, you're simply giving it time to fade naturally. Having a list of go-to distractions prepared can make it much easier to act in the moment. The key is to choose an activity that requires your attention and breaks the craving cycle.",
            "Here are some specific, categorized techniques you can try:\n\n**Sensory & Grounding (Engage your senses):**\n- **Taste:** Drink a large glass of ice-cold water, sip on a strongly flavored herbal tea (like peppermint or ginger), or chew on intensely flavored gum.\n- **Touch:** Splash cold water on your face and wrists. Hold an ice cube in your hand. Take a hot or cold shower.\n- **Smell:** Light a scented candle, sniff some essential oils, or crush a fresh herb like mint or rosemary in your fingers.\n- **Sound:** Put on a specific, loud song that changes your mood, or listen to a short, engaging podcast.\n\n**Mental Distraction (Occupy your mind):**\n- **Play a Game:** Engage in a fast-paced game on your phone that requires concentration.\n- **Do a Puzzle:** Work on a crossword, Sudoku, or a word game.\n- **Count Backwards:** Try counting backwards from 100 by sevens. It's surprisingly difficult and requires focus.\n- **Plan Something:** Plan a meal, a future day trip, or a small project. The act of planning redirects your thoughts.\n\n**Physical Action (Change your environment & body):**\n- **Move Your Body:** Do 10 push-ups or jumping jacks. Go for a brisk five-minute walk.\n- **Change Your Location:** If you're inside, step outside for fresh air. A simple change of scenery can break the association.\n- **Tackle a Quick Chore:** Tidy one drawer, wash the dishes, or take out the recycling. A small, completed task provides a sense of accomplishment.\n- **Connect with a Friend:** Call or text a supportive friend. You don't have to talk about the craving; just have a normal conversation.",
            "If you find that cravings are frequent and intense, and that managing them on your own is becoming exhausting, please don't struggle in silence. This is a sign that your body has developed a dependence, and professional support can make all the difference. Helplines like Drinkline (0300 123 1110) offer free, confidential advice. You can also visit our Support section to connect with a range of UK services and our confidential AI assistant, 'Beacon', who can provide immediate guidance to help you through the urge.",
        ],
    },
    Article {
        slug: "how-to-support-a-friend",
        title: "Worried About a Friend? How to Help Without Pushing Them Away",
        summary: "It's hard to watch someone you care about struggle. Learn how to offer genuine support to a friend without causing conflict or enabling their behavior.",
        category: "Supporting Others",
        body: &[
            "It is incredibly painful to watch a friend or loved one struggle with their drinking. Your instinct is to help, but the fear of saying the wrong thing, causing an argument, or pushing them away can be paralyzing. The most important first step is to approach the situation with empathy, not accusation. Remember that problem drinking is often a symptom of deeper issues, like stress, anxiety, or trauma. Your goal is not to 'fix' them, but to open a door for them to talk and to know that you care.",
            "Timing and setting are everything. Never bring up your concerns when they have been drinking or when you are in the middle of an argument. Wait for a calm, sober, and private moment when you won't be interrupted. Instead of using accusatory 'you' statements like 'You're drinking too much,' frame your concerns around your own feelings. Use 'I' statements, such as, 'I've been worried about you since...' or 'I feel concerned when I see...'. Be specific and non-judgmental. For example, instead of 'You were a mess last night,' try 'I was worried when you couldn't get home safely last night.'",
            "Prepare for a range of reactions. Your friend might be relieved that someone has finally noticed and be open to talking. They might also become defensive, angry, or deny there's a problem. This is a common defense mechanism. Don't get drawn into an argument. State your concerns calmly, listen to their perspective, and then back off. You have planted a seed. The goal of the first conversation is simply to express your concern and let them know you're there for them. Reassure them that you value their friendship no matter what.",
            "Supporting someone also means setting healthy boundaries for yourself. It is not your responsibility to make excuses for them, lend them money for alcohol, or shield them from the consequences of their actions. This is called enabling, and it can prevent them from recognizing the severity of their problem. It's also vital to look after your own mental health. Organizations like Al-Anon provide fantastic support for the families and friends of people with drinking problems. You can also gently help your friend by showing them the Resources or Support sections of this app. It can be a low-pressure way for them to explore information and find help on their own terms.",
        ],
    },
    Article {
        slug: "benefits-of-taking-a-break",
        title: "The 30-Day Reset: What Really Happens When You Stop Drinking",
        summary: "Thinking of a Dry January or Sober October? Discover the incredible, rapid benefits a short break from alcohol can have on your body and mind.",
        category: "Health & Wellbeing",
        body: &[
            "Taking a structured break from alcohol—even for just 30 days—can be a transformative experience. It acts as a powerful reset button for your body and mind, allowing you to re-evaluate your habits from a place of clarity. The positive changes often happen much faster than people expect, providing powerful motivation to continue.",
            "In the first week, the most significant benefit is often sleep. Alcohol might make you feel drowsy, but it severely disrupts the quality of your sleep, particularly the deep REM cycles crucial for mental restoration. Within just a few nights of not drinking, you'll likely experience deeper, more restorative sleep, waking up with more energy and less 'brain fog.' You'll also be far better hydrated, which can reduce headaches and improve your skin's appearance.",
            "By week two, the mental health benefits become more apparent. Alcohol is a depressant, and it can exacerbate feelings of anxiety and low mood. Without it, your brain chemistry begins to rebalance, often leading to a noticeable improvement in your overall mood and a reduction in anxiety levels. Physically, you might notice less puffiness in your face and clearer skin as your body is no longer dealing with alcohol's inflammatory effects. Your digestion may also improve, with less acid reflux and stomach irritation.",
            "In weeks three and four, the rewards multiply. You'll have saved a significant number of 'empty' calories, which often translates to weight loss. You'll also have saved a surprising amount of money. Internally, your liver, which works hard to process alcohol, has had a chance to rest and repair itself, reducing fat deposits. Most importantly, you will have proven to yourself that you don't need alcohol to socialize, relax, or cope with stress. This boost in self-efficacy is perhaps the most valuable benefit of all. If you find that taking a break is extremely difficult or brings up uncomfortable feelings, that is valuable information. It's a sign that it might be time to seek more structured help, and our Support page is a great, confidential place to start exploring your options.",
        ],
    },
    Article {
        slug: "uk-support-groups-explained",
        title: "You're Not Alone: Finding the Right UK Support Group for You",
        summary: "From AA to SMART Recovery, the UK has a strong network of free support groups. Learn about the main options to find one that fits your style.",
        category: "Supporting Others",
        body: &[
            "Trying to change your relationship with alcohol on your own can feel isolating. Connecting with others who share similar experiences is one of the most powerful and effective steps you can take. Peer support groups provide a safe, non-judgmental space to share your struggles, learn coping strategies, and realize you are not alone. The UK has an excellent network of free, confidential support groups, each with a slightly different approach.",
            "**Alcoholics Anonymous (AA)** is the most well-known support group. It follows a 12-step program that guides members towards recovery. AA meetings are run by members for members and are available in nearly every community in the UK, as well as online. The program has a spiritual element, referring to a 'Higher Power,' but it is open to people of all faiths and none; the interpretation is personal. It provides a strong sense of community and accountability, with many members having a 'sponsor'—a long-term member who offers guidance.",
            "**SMART Recovery** offers a secular, science-based alternative to AA. It uses tools from cognitive-behavioral therapy (CBT) and other evidence-based practices. Instead of the 12 steps, SMART focuses on a 4-Point Program®: (1) Building and maintaining motivation, (2) Coping with urges, (3) Managing thoughts, feelings, and behaviors, and (4) Living a balanced life. The meetings are practical and focused on learning and applying tools to empower individuals to manage their own recovery.",
            "**Your local NHS** also provides or commissions dedicated drug and alcohol services, often run by charities like We Are With You or Change Grow Live. These services are free, professional, and entirely confidential. You can usually self-refer without needing to see a GP. They offer a wide range of support, including one-on-one sessions with a key worker, structured group therapy, medical advice, and pathways to detox if needed. They are an excellent starting point if you're unsure what you need.",
            "Finding the right fit is a personal choice. Some people attend multiple types of groups. The best approach is to try a meeting and see how it feels. There is no pressure to speak until you are ready. For a comprehensive list of these organizations, including contact numbers and websites, please visit our Support page. Taking that first step to reach out can be the start of a whole new chapter.",
        ],
    },
    Article {
        slug: "recognizing-the-signs",
        title: "Is It Just a Habit? How to Spot the Signs of Problem Drinking",
        summary: "Problem drinking isn't always obvious. Use this simple checklist to honestly assess your own habits or better understand the signs in someone you love.",
        category: "Coping Strategies",
        body: &[
            "The line between a regular habit and a potential problem with alcohol can be blurry. It's not about how much or how often someone drinks, but rather the *impact* that drinking is having on their life. Problem drinking exists on a spectrum, and it doesn't always look like the stereotypes. Many people maintain jobs and relationships while privately struggling. An honest self-assessment can be a courageous first step towards making a positive change.",
            "Consider the behavioral signs. Have you started hiding how much you drink, or drinking alone more often? Do you find yourself drinking more than you originally intended, or for longer periods? Perhaps you've tried to cut down or take a break but found you couldn't stick to it. A key indicator is when alcohol starts taking priority over other things—neglecting responsibilities at work or home, or losing interest in hobbies and activities you once enjoyed because they get in the way of drinking.",
            "Pay attention to the psychological signs. Do you spend a lot of time thinking about your next drink? Do you rely on alcohol to relax, de-stress, or feel confident? You might experience increased irritability, mood swings, or anxiety, especially when you're not drinking. Another critical sign is continuing to drink even when you know it's causing problems with your mental health or relationships. Memory loss or 'blackouts' where you can't remember what happened while you were drinking are a significant red flag.",
            "It's also important to recognize the concept of tolerance—needing more and more alcohol to feel the same effect. This is a sign that your body is adapting to the presence of alcohol. If you experience physical withdrawal symptoms when you stop—like shaking, sweating, nausea, or anxiety—this indicates a physical dependence, and it is crucial to seek medical advice before stopping.",
            "If any of these signs resonate with you, please know that it's not a sign of weakness or a moral failing. Alcohol use disorder is a recognized medical condition, and effective support is available. Recognizing the problem is the most difficult and bravest step. You are not alone, and help is completely confidential. Please visit our Support section now to find a list of services, or call Drinkline on 0300 123 1110 to speak to a trained advisor.",
        ],
    },
];
