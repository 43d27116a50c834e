//! Static reply banks.

/// General supportive replies for chat input with no recognised keyword.
pub const GENERAL_REPLIES: &[&str] = &[
    "I hear you. Thank you for sharing that with me — that matters.",
    "That sounds difficult. Let's take one small step together: a slow breath now.",
    "You're doing your best in a tough moment. What is one tiny thing you could do next?",
    "It makes sense you'd feel this way. Would you like a short grounding exercise?",
    "You matter. Can I help you pick one gentle action for the next 10 minutes?",
    "You’re allowed to rest. What would a small, kind step for yourself look like?",
    "Let's name the feeling together — what label fits it right now?",
    "Sometimes focusing on one breath can open a small window of calm.",
    "This moment is temporary. One tiny choice now can change the next hour.",
    "You're not alone in this — thank you for telling me. Would journaling help?",
    "I notice a lot in your words. Let's simplify: one tiny thing to do next?",
    "Small steps matter. What's one reasonable step you can take after this chat?",
    "If you're tired, soft rest counts as a helpful action. Permission: allowed.",
    "You’ve handled hard things before — what strength did you use that time?",
    "I can support you with a short micro-plan. Would you like that?",
    "A short walk, a drink of water, or a five-minute stretch can help reset.",
    "Be kind to yourself — how would you comfort a friend in this moment?",
    "If you want, I can guide you through a calming breathing exercise now.",
    "Name one small achievement from today, even if it feels tiny.",
    "Let's create a gentle plan: two steps, low-effort — which one first?",
    "It’s okay to feel unsettled. You’re doing better than you think in this moment.",
    "If you're worried about tomorrow, let's create a simple plan for one task.",
    "Acknowledging how you feel is brave. You're not expected to have all the answers.",
    "Would you like a grounding prompt that uses your five senses?",
    "You’re allowed to pause. Short rests often protect longer-term progress.",
    "Choose one thing that brings you comfort — a warm drink, a soft song, a hug.",
    "Sometimes putting the worry on paper reduces its size. Want a writing prompt?",
    "If your energy is low, a 10-minute restorative break can restore clarity.",
    "You're more resilient than you feel right now. Let's find one supportive action.",
    "Would you like an affirmation you can say slowly for one minute?",
    "Can I help convert that thought into a small, practical next step?",
    "If perfection is blocking you, aim for 'good enough' instead of perfect.",
    "You're allowed to ask for help. Is there someone you trust who can support you?",
    "If you're feeling overwhelmed, let's try a ten-minute 'do one thing' rule.",
    "This feeling is valid — validation is the first step toward a small solution.",
    "Let's acknowledge the difficulty and choose one tiny thing to do next.",
    "If it helps, we can craft a short breathing routine to follow together.",
    "Try to name three things you can see around you — name them slowly.",
    "Even micro-choices shape momentum. Pick one tiny choice to act on now.",
    "You can be both gentle and productive. What's a kind next step?",
    "If you need a distraction, a short creative task could shift your mood.",
    "If you're anxious, longer exhales help — try exhale for six seconds.",
    "Sometimes a small ritual (tea, notebook) anchors you. Which one helps?",
    "I can help you build a short, manageable plan. Would that be useful?",
    "If you're grieving, small compassionate actions matter more than answers.",
    "You deserve support and rest — let's plan a soft next step.",
    "Do you want a short affirmation, a breathing guide, or a micro-plan now?",
    "It's okay to take things slowly — one minute at a time is still progress.",
    "Let's convert worry to a tiny experimental action: try one small test.",
    "If sleep is poor, a small wind-down routine tonight may help.",
    "You're allowed to feel conflicting emotions — both can be true at once.",
    "Would listing 3 things you did well help to shift perspective?",
    "If it helps, I can lighten the task list into 10-minute chunks.",
    "You don't have to fix everything at once. A small change today helps tomorrow.",
    "Focus on controlling what you can; release what you can't right now.",
    "If you're stuck, try a 'two minute tidy' — tidy one small corner and breathe.",
    "Try naming one worry and one counter-fact to reduce its power.",
    "Would a short guided prompt for reflection help you now?",
    "I can offer a supportive reframe for a thought if you'd like to share it.",
    "You are allowed to reduce pressure. Small boundaries create safety.",
    "If you feel criticism, treat yourself as you would a close friend.",
    "Small gestures of self-care are powerful — what's one small gesture for you?",
    "If you're worried about judgement, practice 'it's mine to try' language.",
    "Would a micro-plan (3 steps) for the next hour be helpful?",
    "If your energy is up, use it for a small constructive action now.",
    "Try to notice one positive detail in the present moment.",
    "It's okay to retry tomorrow — progress is rarely linear.",
    "You are worthy of kindness and calm — starting now matters.",
    "You can try one new habit for 7 days and reassess — small wins compound.",
    "If resilience feels low, recall a prior moment you coped well for evidence.",
    "Name one value and choose an action today that aligns with it.",
    "You might benefit from a 2-minute grounding practice right now.",
    "If you're unsure, try one low-cost experiment and observe the outcome.",
    "You deserve compassion not just outcomes. What helps you feel cared for?",
];

pub const MOOD_REPLIES: &[&str] = &[
    "Try a grounding exercise: name 5 things you can see, 4 you can touch, 3 you can hear.",
    "If low, a brief connection with a trusted person can help you feel less isolated.",
    "If anxious, try longer exhale breathing for five cycles and notice the body soften.",
    "Neutral days are steady — schedule a small joyful activity to brighten it.",
    "If stressed, break tasks into 10-minute blocks and do one clean start.",
    "Hydration + 90 seconds of natural light often shifts energy levels slightly.",
];

pub const DAILY_TIPS: &[&str] = &[
    "Step outside for 90 seconds and soften your gaze across the distance.",
    "Write three things you’re grateful for today and why they matter.",
    "Set one tiny goal for the next hour and complete it — celebrate the finish.",
    "Drink a full glass of water slowly, noticing the temperature and taste.",
    "Do a two-minute tidy of one small area to reduce visual clutter.",
    "Play one comforting song and notice what it does in your body.",
    "Text one kind message to someone you care about.",
    "Walk for 10 minutes with no screens and notice your pace.",
    "Stretch your shoulders and chest for 60 seconds and breathe slowly.",
    "Make a short plan for tomorrow with one non-negotiable positive item.",
    "Practice three-count inhale, five-count exhale breathing for two minutes.",
    "Write a short compassion note to yourself: 1–2 sentences.",
    "Schedule 10 minutes of phone-free time as a reset.",
    "Name three things you did well this week, even tiny ones.",
    "Allow 20 minutes of restorative rest and step away from tasks.",
    "Create a small pre-sleep routine: dim lights, tea, one note of gratitude.",
];

/// Acknowledgements after a journal entry is saved.
pub const JOURNAL_ACKS: &[&str] = &[
    "Journal saved — you’ve honored this moment.",
    "Entry recorded. Small notes build meaningful patterns.",
    "Saved. Thank you for showing up for yourself.",
];

pub const GROWTH_ACKS: &[&str] = &[
    "Growth snapshot ready — identify one focus for the next week.",
    "Report generated. Celebrate one small, concrete win this week.",
];

pub const BREATHING_GUIDES: &[&str] = &[
    "Inhale 4 • Hold 4 • Exhale 6 — repeat 6 cycles, relax shoulders.",
    "Try box breathing 4-4-4-4 for three cycles to ground quickly.",
    "Two-minute slow-exhale breathing: focus on lengthening the out-breath.",
];

pub const AFFIRMATIONS: &[&str] = &[
    "I am doing my best, and that is enough today.",
    "Small steps compound — I celebrate each tiny effort.",
    "I give myself permission to rest and to try again.",
];

/// Crisis pointers to emergency services.
pub const EMERGENCY_REPLIES: &[&str] = &[
    "If you are in immediate danger, please call your local emergency number now.",
    "If you might harm yourself, please contact local emergency services or a crisis line immediately.",
];

pub const REFRAMES: &[&str] = &[
    "This feels true right now, yet there may be other explanations. What contradicts this thought?",
    "If a friend thought this, what would you say to them? Try that tone with yourself.",
    "Swap 'always'/'never' language for 'sometimes' to reduce all-or-nothing thinking.",
    "Break the thought into fact vs interpretation and question the evidence.",
    "Reframe: 'I tried; this attempt didn't go as planned; I can try another approach.'",
    "Try 'both/and' thinking: 'This is hard, and I can still find small wins.'",
    "Consider: will this matter in a month or a year? Recalibrate perspective.",
];

pub const MICRO_PLANS: &[&str] = &[
    "Next 10 minutes: do one focused small task.",
    "20-minute walk, leave the phone behind if possible.",
    "Write one sentence for tomorrow's plan and close your journal.",
];

pub const VISUAL_ACKS: &[&str] = &[
    "Visual entry saved — images can show what words cannot.",
    "Saved. Revisit this image in one week to notice changes.",
];

/// Index 0 follows a new mark, index 1 a repeated one.
pub const STREAK_ACKS: &[&str] = &[
    "Marked — small consistency builds momentum.",
    "Already marked today — nice consistency.",
];

pub const ANXIOUS_REPLIES: &[&str] = &[
    "I hear the worry in your words. Let's try a grounding step: name five things you can see.",
    "That sense of worry is heavy — try an extended exhale now: breathe out slowly for six counts.",
    "When anxiety spikes, focusing on the body helps. Would you like a 2-minute breathing guide?",
];

pub const LOW_REPLIES: &[&str] = &[
    "I'm sorry you're feeling this way — a small comforting plan might help. Would you like a gentle step?",
    "Feeling low is valid. Would you like to try a short reflective prompt or a tiny self-care idea?",
    "This sadness matters. Consider reaching out to one trusted person — connection often eases the load.",
];

pub const ANGER_REPLIES: &[&str] = &[
    "Anger can be energizing and also tiring. Would a short grounding or movement help?",
    "Notice the body where the tension shows: shoulders, jaw, chest. A movement release often helps.",
    "Let's turn the feeling into a small practical action — what's one step that might reduce friction?",
];
